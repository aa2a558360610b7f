//! Listening port snapshot service.

use std::collections::HashSet;

use tracing::debug;

use crate::adapters::{SystemProcessTable, SystemSocketTable};
use crate::domain::SnapshotEntry;
use crate::error::{Error, Result};
use crate::ports::{ProcessTableReader, SocketTableReader};

/// Display name for kernel-owned sockets.
const KERNEL_NAME: &str = "system";
/// Display name for owners that exited mid-snapshot.
const GONE_NAME: &str = "-";
/// Display name for owners the caller may not inspect.
const DENIED_NAME: &str = "?";

/// Application service producing the port-to-process table for `list`
/// and `monitor`.
///
/// Stateless: a display loop wanting periodic refresh calls `snapshot`
/// again and discards the previous result; no diff state is kept here.
pub struct SnapshotService<S, P> {
    sockets: S,
    processes: P,
}

impl SnapshotService<SystemSocketTable, SystemProcessTable> {
    /// Create a service backed by the live OS tables.
    pub fn system() -> Self {
        Self::new(SystemSocketTable::new(), SystemProcessTable::new())
    }
}

impl<S, P> SnapshotService<S, P>
where
    S: SocketTableReader,
    P: ProcessTableReader,
{
    /// Create a service over the given capabilities.
    pub fn new(sockets: S, processes: P) -> Self {
        Self { sockets, processes }
    }

    /// Produce one row per listening port, sorted by port number.
    ///
    /// Duplicate ports (dual-stack) collapse to the first enumerated
    /// entry. A vanished or inaccessible owner degrades that row's name;
    /// it never aborts the snapshot.
    pub async fn snapshot(&self) -> Result<Vec<SnapshotEntry>> {
        let sockets = self.sockets.list_listening().await?;

        let mut entries = Vec::new();
        let mut seen: HashSet<u16> = HashSet::new();

        for socket in sockets.iter().filter(|s| s.is_listening()) {
            if !seen.insert(socket.local_port) {
                continue;
            }

            let entry = match socket.pid {
                None => SnapshotEntry {
                    port: socket.local_port,
                    address: socket.address.clone(),
                    pid: None,
                    process_name: KERNEL_NAME.to_string(),
                    command: String::new(),
                },
                Some(pid) => {
                    let (process_name, command) = match self.processes.resolve(pid).await {
                        Ok(info) => {
                            let command = info.command();
                            (info.name, command)
                        }
                        Err(Error::ProcessGone(_)) => {
                            debug!(port = socket.local_port, pid, "owner exited mid-snapshot");
                            (GONE_NAME.to_string(), String::new())
                        }
                        Err(Error::PermissionDenied(_)) => (DENIED_NAME.to_string(), String::new()),
                        Err(e) => return Err(e),
                    };
                    SnapshotEntry {
                        port: socket.local_port,
                        address: socket.address.clone(),
                        pid: Some(pid),
                        process_name,
                        command,
                    }
                }
            };

            entries.push(entry);
        }

        entries.sort_by_key(|e| e.port);
        Ok(entries)
    }
}
