//! Socket table adapters.
//!
//! Platform-specific implementations of socket enumeration.

#[cfg(target_os = "macos")]
mod darwin;

#[cfg(target_os = "linux")]
mod linux;

mod utils;

use crate::domain::ListeningSocket;
use crate::error::Result;
use crate::ports::SocketTableReader;

/// The socket table reader for the current platform.
pub struct SystemSocketTable {
    #[cfg(target_os = "macos")]
    inner: darwin::LsofSocketTable,

    #[cfg(target_os = "linux")]
    inner: linux::SsSocketTable,
}

impl SystemSocketTable {
    /// Create a socket table reader for the current platform.
    pub fn new() -> Self {
        Self {
            #[cfg(target_os = "macos")]
            inner: darwin::LsofSocketTable::new(),

            #[cfg(target_os = "linux")]
            inner: linux::SsSocketTable::new(),
        }
    }
}

impl Default for SystemSocketTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SocketTableReader for SystemSocketTable {
    async fn list_listening(&self) -> Result<Vec<ListeningSocket>> {
        self.inner.list_listening().await
    }
}
