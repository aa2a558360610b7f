//! macOS socket table enumeration using lsof.

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::domain::{ListeningSocket, Protocol, SockState};
use crate::error::{Error, Result};
use crate::ports::SocketTableReader;

use super::utils::parse_address;

/// macOS socket table reader backed by the `lsof` command.
pub struct LsofSocketTable;

impl LsofSocketTable {
    pub fn new() -> Self {
        Self
    }

    /// Parse lsof output into ListeningSocket entries.
    ///
    /// Expected lsof output format:
    /// ```text
    /// COMMAND    PID  USER   FD   TYPE  DEVICE SIZE/OFF NODE NAME
    /// node     34805  code   19u  IPv6  0x3d80      0t0  TCP [::1]:3000 (LISTEN)
    /// mDNSResp   326  _mdns   8u  IPv4  0x9f12      0t0  UDP *:5353
    /// ```
    /// lsof reports per open file descriptor, so every row carries a pid.
    fn parse_output(output: &str) -> Vec<ListeningSocket> {
        let mut sockets = Vec::new();

        for line in output.lines().skip(1) {
            if line.is_empty() {
                continue;
            }

            let components: Vec<&str> = line.split_whitespace().collect();
            if components.len() < 9 {
                continue;
            }

            let pid: u32 = match components[1].parse() {
                Ok(p) => p,
                Err(_) => continue,
            };

            let protocol = match components[7] {
                "TCP" => Protocol::Tcp,
                "UDP" => Protocol::Udp,
                _ => continue,
            };

            let state = if line.trim_end().ends_with("(LISTEN)") {
                SockState::Listen
            } else if protocol == Protocol::Udp {
                SockState::Unconnected
            } else {
                SockState::Other
            };

            let (address, local_port) = match parse_address(components[8]) {
                Some((a, p)) => (a, p),
                None => continue,
            };

            sockets.push(ListeningSocket {
                protocol,
                address,
                local_port,
                state,
                pid: Some(pid),
            });
        }

        sockets
    }
}

impl Default for LsofSocketTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SocketTableReader for LsofSocketTable {
    /// Enumerate listening TCP sockets and bound UDP sockets.
    ///
    /// Executes: `lsof -iTCP -sTCP:LISTEN -iUDP -P -n +c 0`
    async fn list_listening(&self) -> Result<Vec<ListeningSocket>> {
        let output = Command::new("/usr/sbin/lsof")
            .args(["-iTCP", "-sTCP:LISTEN", "-iUDP", "-P", "-n", "+c", "0"])
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    Error::Platform("lsof command not found".to_string())
                }
                _ => Error::CommandFailed(format!("Failed to run lsof: {}", e)),
            })?;

        // lsof exits non-zero whenever any single file could not be
        // inspected; its stdout still carries the entries it could see.
        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| Error::Parse(format!("Invalid UTF-8 in lsof output: {}", e)))?;

        let sockets = Self::parse_output(&stdout);
        debug!(count = sockets.len(), "enumerated socket table");
        Ok(sockets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lsof_output() {
        let output = r#"COMMAND    PID  USER   FD   TYPE             DEVICE SIZE/OFF NODE NAME
node     34805  code   19u  IPv6 0x3d8015e195af1f3f      0t0  TCP [::1]:3000 (LISTEN)
nginx        1  root    6u  IPv4 0x1234567890abcdef      0t0  TCP *:80 (LISTEN)
mDNSResp   326 _mdnsresponder 8u IPv4 0xabcdef            0t0  UDP *:5353
"#;

        let sockets = LsofSocketTable::parse_output(output);
        assert_eq!(sockets.len(), 3);

        assert_eq!(sockets[0].local_port, 3000);
        assert_eq!(sockets[0].pid, Some(34805));
        assert_eq!(sockets[0].state, SockState::Listen);

        assert_eq!(sockets[1].local_port, 80);
        assert_eq!(sockets[1].protocol, Protocol::Tcp);

        assert_eq!(sockets[2].local_port, 5353);
        assert_eq!(sockets[2].protocol, Protocol::Udp);
        assert_eq!(sockets[2].state, SockState::Unconnected);
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let output = "COMMAND PID USER FD TYPE DEVICE SIZE/OFF NODE NAME\nshort line\n";
        assert!(LsofSocketTable::parse_output(output).is_empty());
    }
}
