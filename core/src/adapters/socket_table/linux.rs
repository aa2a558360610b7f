//! Linux socket table enumeration using ss.

use std::process::Stdio;
use std::sync::OnceLock;

use regex::Regex;
use tokio::process::Command;
use tracing::debug;

use crate::domain::{ListeningSocket, Protocol, SockState};
use crate::error::{Error, Result};
use crate::ports::SocketTableReader;

use super::utils::parse_address;

/// Linux socket table reader backed by the `ss` command.
pub struct SsSocketTable;

fn pid_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"pid=(\d+)").unwrap())
}

impl SsSocketTable {
    pub fn new() -> Self {
        Self
    }

    /// Parse ss output into ListeningSocket entries.
    ///
    /// Expected ss output format (no header with -H):
    /// ```text
    /// tcp  LISTEN 0   4096    127.0.0.1:8080    0.0.0.0:*   users:(("web",pid=111,fd=6))
    /// udp  UNCONN 0   0         0.0.0.0:68      0.0.0.0:*
    /// ```
    /// Lines without a `users:` column are kernel-owned or unattributable
    /// to the caller and are kept with `pid == None`.
    fn parse_output(output: &str) -> Vec<ListeningSocket> {
        let mut sockets = Vec::new();

        for line in output.lines() {
            if line.is_empty() {
                continue;
            }

            // Columns: [Netid] [State] [Recv-Q] [Send-Q] [Local:Port] [Peer:Port] [Process]
            let components: Vec<&str> = line.split_whitespace().collect();
            if components.len() < 6 {
                continue;
            }

            let protocol = match components[0] {
                "tcp" => Protocol::Tcp,
                "udp" => Protocol::Udp,
                _ => continue,
            };

            let state = match components[1] {
                "LISTEN" => SockState::Listen,
                "UNCONN" => SockState::Unconnected,
                _ => SockState::Other,
            };

            let (address, local_port) = match parse_address(components[4]) {
                Some((a, p)) => (a, p),
                None => continue,
            };

            let pid = components
                .get(6)
                .and_then(|c| pid_regex().captures(c))
                .and_then(|caps| caps[1].parse().ok());

            sockets.push(ListeningSocket {
                protocol,
                address,
                local_port,
                state,
                pid,
            });
        }

        sockets
    }
}

impl Default for SsSocketTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SocketTableReader for SsSocketTable {
    /// Enumerate listening TCP and UDP sockets.
    ///
    /// Executes: `ss -Hlntup`
    ///
    /// Flags explained:
    /// -H, --no-header     Suppress header line
    /// -l, --listening     display listening sockets
    /// -n, --numeric       don't resolve service names
    /// -t, --tcp           display TCP sockets
    /// -u, --udp           display UDP sockets
    /// -p, --processes     show process using socket
    async fn list_listening(&self) -> Result<Vec<ListeningSocket>> {
        // Resolved via PATH: distributions disagree on /usr/bin vs /usr/sbin.
        let output = Command::new("ss")
            .args(["-Hlntup"])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    Error::Platform("ss command not found".to_string())
                }
                _ => Error::CommandFailed(format!("Failed to run ss: {}", e)),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("Operation not permitted") || stderr.contains("Permission denied") {
                return Err(Error::PermissionDenied(format!(
                    "socket table enumeration denied: {}",
                    stderr.trim()
                )));
            }
            return Err(Error::CommandFailed(format!(
                "ss exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| Error::Parse(format!("Invalid UTF-8 in ss output: {}", e)))?;

        let sockets = Self::parse_output(&stdout);
        debug!(count = sockets.len(), "enumerated socket table");
        Ok(sockets)
    }
}
