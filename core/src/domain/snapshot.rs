//! Snapshot table row for list/monitor display.

use serde::Serialize;

use super::ProcessType;

/// One row of the port-to-process table shown by `list` and `monitor`.
///
/// Unresolvable owners are folded into placeholder names rather than
/// errors: `system` for kernel-owned sockets, `-` for processes that
/// exited mid-snapshot, `?` for processes the caller may not inspect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    /// Local port number.
    pub port: u16,

    /// Local address the socket is bound to.
    pub address: String,

    /// Owning pid, `None` for kernel-owned sockets.
    pub pid: Option<u32>,

    /// Display name of the owner (or a placeholder).
    pub process_name: String,

    /// Full command line of the owner, empty when unavailable.
    pub command: String,
}

impl SnapshotEntry {
    /// Detect the process category for the TYPE column.
    pub fn process_type(&self) -> ProcessType {
        ProcessType::detect(&self.process_name)
    }

    /// Check if this entry matches an optional port and name filter.
    pub fn matches(&self, port: Option<u16>, name: Option<&str>) -> bool {
        if let Some(p) = port {
            if self.port != p {
                return false;
            }
        }
        if let Some(n) = name {
            if !self
                .process_name
                .to_lowercase()
                .contains(&n.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(port: u16, name: &str) -> SnapshotEntry {
        SnapshotEntry {
            port,
            address: "*".to_string(),
            pid: Some(42),
            process_name: name.to_string(),
            command: String::new(),
        }
    }

    #[test]
    fn test_matches_filters() {
        let e = entry(3000, "node");
        assert!(e.matches(None, None));
        assert!(e.matches(Some(3000), None));
        assert!(!e.matches(Some(8080), None));
        assert!(e.matches(None, Some("NODE")));
        assert!(!e.matches(None, Some("nginx")));
        assert!(e.matches(Some(3000), Some("node")));
    }

    #[test]
    fn test_process_type_from_name() {
        assert_eq!(entry(80, "nginx").process_type(), ProcessType::WebServer);
        assert_eq!(entry(5432, "postgres").process_type(), ProcessType::Database);
    }
}
