//! Process information data structure.

use serde::{Deserialize, Serialize};

/// Information about a process, as of the moment it was resolved.
///
/// Sourced live from the OS process table. The process may exit between
/// resolution and use; holders of a `ProcessInfo` must treat it as a
/// snapshot, not a handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Process ID.
    pub pid: u32,

    /// Short process name (e.g. "nginx").
    pub name: String,

    /// Full command line, one element per argument.
    pub cmdline: Vec<String>,
}

impl ProcessInfo {
    /// The command line joined for single-line display.
    pub fn command(&self) -> String {
        self.cmdline.join(" ")
    }
}

impl std::fmt::Display for ProcessInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (PID {})", self.name, self.pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_joins_arguments() {
        let info = ProcessInfo {
            pid: 1234,
            name: "node".to_string(),
            cmdline: vec!["node".to_string(), "server.js".to_string()],
        };
        assert_eq!(info.command(), "node server.js");
        assert_eq!(info.to_string(), "node (PID 1234)");
    }

    #[test]
    fn test_empty_cmdline() {
        let info = ProcessInfo {
            pid: 2,
            name: "kthreadd".to_string(),
            cmdline: Vec::new(),
        };
        assert_eq!(info.command(), "");
    }
}
