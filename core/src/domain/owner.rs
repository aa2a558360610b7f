//! Discriminated results of port owner lookups and terminations.

use serde::Serialize;

use super::ProcessInfo;

/// Outcome of asking "who owns port P".
///
/// Every way the answer can go, including the process vanishing between
/// enumeration and resolution, is a normal variant rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum PortOwner {
    /// A listening socket with a user-space owner was found.
    ///
    /// `info` is `None` when the owner exists but the caller lacks the
    /// rights to inspect it; the pid is still reported.
    Found {
        pid: u32,
        info: Option<ProcessInfo>,
    },

    /// A listening socket with no owning process (kernel-owned).
    KernelOwned,

    /// The pid existed at enumeration time but vanished before resolution.
    ProcessGone { pid: u32 },

    /// No listening socket on that port.
    NotFound,
}

/// Outcome of attempting to terminate the owner of a port.
///
/// At most one signal is sent per call; the caller is responsible for
/// verifying the effect if desired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum TerminationOutcome {
    /// The signal was delivered.
    Signalled {
        pid: u32,
        /// Resolved process name, when the caller was allowed to see it.
        name: Option<String>,
        /// Whether the unconditional kill signal was used.
        forced: bool,
    },

    /// No listening socket with a user-space owner on that port.
    NothingToKill,

    /// The owner exited before the signal could be delivered.
    AlreadyGone { pid: u32 },

    /// The caller lacks the rights to signal the owner.
    PermissionDenied { pid: u32 },
}
