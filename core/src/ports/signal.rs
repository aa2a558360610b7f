//! Process signaller port (interface).

use crate::error::Result;

/// Port for delivering termination signals.
pub trait ProcessSignaller: Send + Sync {
    /// Send exactly one termination signal to `pid`.
    ///
    /// `force == false` requests graceful termination (a signal the
    /// target may intercept); `force == true` kills unconditionally.
    /// There is no retry, escalation, or wait-for-exit: at-most-once
    /// delivery is the only guarantee.
    fn signal(&self, pid: u32, force: bool) -> Result<()>;
}
