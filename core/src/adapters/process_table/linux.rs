//! Linux process resolution via /proc.

use tokio::fs;

use crate::domain::ProcessInfo;
use crate::error::{Error, Result};
use crate::ports::ProcessTableReader;

/// Linux process table reader backed by `/proc/<pid>`.
pub struct ProcProcessTable;

impl ProcProcessTable {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Split the NUL-separated `/proc/<pid>/cmdline` contents into arguments.
///
/// Kernel threads have an empty cmdline; the result is then empty.
fn parse_cmdline(raw: &[u8]) -> Vec<String> {
    raw.split(|b| *b == 0)
        .filter(|arg| !arg.is_empty())
        .map(|arg| String::from_utf8_lossy(arg).into_owned())
        .collect()
}

/// Map a /proc read failure onto the error taxonomy. A vanished pid shows
/// up as NotFound and is the expected enumerate/resolve race.
fn classify(pid: u32, err: std::io::Error) -> Error {
    match err.kind() {
        std::io::ErrorKind::NotFound => Error::ProcessGone(pid),
        std::io::ErrorKind::PermissionDenied => {
            Error::PermissionDenied(format!("cannot inspect process {}", pid))
        }
        _ => Error::Io(err),
    }
}

impl ProcessTableReader for ProcProcessTable {
    async fn resolve(&self, pid: u32) -> Result<ProcessInfo> {
        let comm = fs::read_to_string(format!("/proc/{}/comm", pid))
            .await
            .map_err(|e| classify(pid, e))?;

        // The process can exit between the two reads; that is still
        // ProcessGone, not a fault.
        let raw = fs::read(format!("/proc/{}/cmdline", pid))
            .await
            .map_err(|e| classify(pid, e))?;

        Ok(ProcessInfo {
            pid,
            name: comm.trim().to_string(),
            cmdline: parse_cmdline(&raw),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cmdline_splits_on_nul() {
        let raw = b"node\0server.js\0--port\08080\0";
        assert_eq!(
            parse_cmdline(raw),
            vec!["node", "server.js", "--port", "8080"]
        );
    }

    #[test]
    fn test_parse_cmdline_empty_for_kernel_threads() {
        assert!(parse_cmdline(b"").is_empty());
        assert!(parse_cmdline(b"\0").is_empty());
    }

    #[tokio::test]
    async fn test_resolve_current_process() {
        let reader = ProcProcessTable::new();
        let pid = std::process::id();

        let info = reader.resolve(pid).await.unwrap();
        assert_eq!(info.pid, pid);
        assert!(!info.name.is_empty());
        assert!(!info.cmdline.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_missing_process_is_gone() {
        let reader = ProcProcessTable::new();

        // PIDs are bounded well below this on Linux.
        match reader.resolve(999_999_999).await {
            Err(Error::ProcessGone(pid)) => assert_eq!(pid, 999_999_999),
            other => panic!("expected ProcessGone, got {:?}", other),
        }
    }
}
