//! Process table reader port (interface).

use crate::domain::ProcessInfo;
use crate::error::Result;

/// Port for resolving process details by pid.
pub trait ProcessTableReader: Send + Sync {
    /// Fetch name and command line of `pid` as of the moment of the call.
    ///
    /// The pid is a previously observed value and is not re-validated
    /// first: callers must treat
    /// [`Error::ProcessGone`](crate::Error::ProcessGone) as a normal
    /// outcome (the race between enumeration and resolution), and
    /// [`Error::PermissionDenied`](crate::Error::PermissionDenied) as a
    /// degraded result rather than a fault.
    fn resolve(&self, pid: u32) -> impl std::future::Future<Output = Result<ProcessInfo>> + Send;
}
