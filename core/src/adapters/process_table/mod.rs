//! Process table adapters.
//!
//! Platform-specific implementations of process resolution.

#[cfg(target_os = "macos")]
mod darwin;

#[cfg(target_os = "linux")]
mod linux;

use crate::domain::ProcessInfo;
use crate::error::Result;
use crate::ports::ProcessTableReader;

/// The process table reader for the current platform.
pub struct SystemProcessTable {
    #[cfg(target_os = "macos")]
    inner: darwin::PsProcessTable,

    #[cfg(target_os = "linux")]
    inner: linux::ProcProcessTable,
}

impl SystemProcessTable {
    /// Create a process table reader for the current platform.
    pub fn new() -> Self {
        Self {
            #[cfg(target_os = "macos")]
            inner: darwin::PsProcessTable::new(),

            #[cfg(target_os = "linux")]
            inner: linux::ProcProcessTable::new(),
        }
    }
}

impl Default for SystemProcessTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTableReader for SystemProcessTable {
    async fn resolve(&self, pid: u32) -> Result<ProcessInfo> {
        self.inner.resolve(pid).await
    }
}
