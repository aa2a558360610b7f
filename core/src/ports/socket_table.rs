//! Socket table reader port (interface).

use crate::domain::ListeningSocket;
use crate::error::Result;

/// Port for enumerating the OS socket table.
///
/// Implementations handle platform-specific details (ss, lsof, etc.)
pub trait SocketTableReader: Send + Sync {
    /// Enumerate all inet sockets the OS exposes to the caller.
    ///
    /// Read-only; every call re-reads the live table from scratch.
    /// Entries that cannot be attributed to a process are reported with
    /// `pid == None` rather than dropped. Fails with
    /// [`Error::PermissionDenied`](crate::Error::PermissionDenied) when the
    /// OS denies the enumeration wholesale, and with
    /// [`Error::Platform`](crate::Error::Platform) when the facility is
    /// unavailable.
    fn list_listening(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ListeningSocket>>> + Send;
}
