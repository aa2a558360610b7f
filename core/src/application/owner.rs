//! Port owner lookup and termination service.

use tracing::debug;

use crate::adapters::{SystemProcessTable, SystemSignaller, SystemSocketTable};
use crate::domain::{PortOwner, TerminationOutcome};
use crate::error::{Error, Result};
use crate::ports::{ProcessSignaller, ProcessTableReader, SocketTableReader};

/// Application service answering "who owns port P" and "kill whoever owns
/// port P".
///
/// Per-entry failures (a process vanishing between enumeration and
/// resolution, or one the caller may not inspect) are converted into
/// result variants; only a failed enumeration propagates as `Err`.
pub struct OwnerService<S, P, K> {
    sockets: S,
    processes: P,
    signals: K,
}

impl OwnerService<SystemSocketTable, SystemProcessTable, SystemSignaller> {
    /// Create a service backed by the live OS tables.
    pub fn system() -> Self {
        Self::new(
            SystemSocketTable::new(),
            SystemProcessTable::new(),
            SystemSignaller::new(),
        )
    }
}

impl<S, P, K> OwnerService<S, P, K>
where
    S: SocketTableReader,
    P: ProcessTableReader,
    K: ProcessSignaller,
{
    /// Create a service over the given capabilities.
    pub fn new(sockets: S, processes: P, signals: K) -> Self {
        Self {
            sockets,
            processes,
            signals,
        }
    }

    /// Find the owner of a local listening port.
    ///
    /// When several listening sockets share the port (dual-stack), the
    /// first entry in enumeration order wins; the enumeration defines no
    /// sort, so the tie-break is not deterministic.
    pub async fn find_owner(&self, port: u16) -> Result<PortOwner> {
        let sockets = self.sockets.list_listening().await?;

        let Some(socket) = sockets
            .iter()
            .find(|s| s.local_port == port && s.is_listening())
        else {
            return Ok(PortOwner::NotFound);
        };

        let Some(pid) = socket.pid else {
            return Ok(PortOwner::KernelOwned);
        };

        match self.processes.resolve(pid).await {
            Ok(info) => Ok(PortOwner::Found {
                pid,
                info: Some(info),
            }),
            Err(Error::ProcessGone(_)) => {
                debug!(port, pid, "owner exited between enumeration and resolution");
                Ok(PortOwner::ProcessGone { pid })
            }
            // Degraded: the owner exists but cannot be inspected. Report
            // the pid alone instead of failing the lookup.
            Err(Error::PermissionDenied(_)) => Ok(PortOwner::Found { pid, info: None }),
            Err(e) => Err(e),
        }
    }

    /// Terminate the owner of a local listening port.
    ///
    /// Sends a single graceful-termination signal, or an unconditional
    /// kill when `force` is set. No retry and no wait-for-exit: callers
    /// verify the effect themselves if they care.
    pub async fn terminate_owner(&self, port: u16, force: bool) -> Result<TerminationOutcome> {
        let (pid, name) = match self.find_owner(port).await? {
            PortOwner::Found { pid, info } => (pid, info.map(|i| i.name)),
            PortOwner::ProcessGone { pid } => {
                return Ok(TerminationOutcome::AlreadyGone { pid })
            }
            PortOwner::KernelOwned | PortOwner::NotFound => {
                return Ok(TerminationOutcome::NothingToKill)
            }
        };

        match self.signals.signal(pid, force) {
            Ok(()) => Ok(TerminationOutcome::Signalled { pid, name, forced: force }),
            Err(Error::ProcessGone(_)) => Ok(TerminationOutcome::AlreadyGone { pid }),
            Err(Error::PermissionDenied(_)) => Ok(TerminationOutcome::PermissionDenied { pid }),
            Err(e) => Err(e),
        }
    }
}
