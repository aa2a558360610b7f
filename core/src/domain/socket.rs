//! Listening socket data structure.

use serde::{Deserialize, Serialize};

/// Transport protocol of an enumerated socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Tcp,
    Udp,
}

/// State of an enumerated socket.
///
/// Only `Listen` entries are relevant to owner lookups; UDP sockets show
/// up as `Unconnected` and everything else is collapsed into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SockState {
    Listen,
    Unconnected,
    Other,
}

/// A single inet socket as reported by the OS.
///
/// Produced fresh on each enumeration and never mutated. There is no
/// identity beyond the fields: two enumerations may report the same port
/// with different pids if the owning process changed between calls. That
/// race is inherent and tolerated downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListeningSocket {
    /// Transport protocol.
    pub protocol: Protocol,

    /// Local address the socket is bound to (e.g. "127.0.0.1", "[::]", "*").
    pub address: String,

    /// Local port number.
    pub local_port: u16,

    /// Socket state as reported by the enumeration facility.
    pub state: SockState,

    /// Owning process id. `None` means the OS reported no user-space
    /// owner (kernel-owned, or unattributable to the caller).
    pub pid: Option<u32>,
}

impl ListeningSocket {
    /// Whether this entry is relevant to port-owner lookups.
    pub fn is_listening(&self) -> bool {
        self.state == SockState::Listen
    }
}

impl std::fmt::Display for ListeningSocket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{} ({:?}", self.address, self.local_port, self.state)?;
        match self.pid {
            Some(pid) => write!(f, ", pid {})", pid),
            None => write!(f, ", kernel)"),
        }
    }
}
