//! PortReaper Core Library
//!
//! Library for inspecting and managing local network listening ports.
//! Provides functionality to:
//! - Enumerate listening sockets and map them to owning processes
//! - Answer "who owns port P" with race- and permission-tolerant results
//! - Terminate the owner of a port (gracefully or forcefully)
//! - Produce port-to-process snapshot tables for display loops
//! - Probe a remote host for open TCP ports
//! - Manage user configuration (scan defaults, monitor interval)
//!
//! # Architecture
//! This library follows hexagonal architecture (ports & adapters):
//! - `domain`: Pure business logic and data models
//! - `ports`: Trait definitions (interfaces)
//! - `adapters`: External system implementations
//! - `application`: Use case services
//!
//! The live OS socket and process tables are accessed through the
//! `SocketTableReader` / `ProcessTableReader` / `ProcessSignaller` traits,
//! so tests substitute fixed fixtures instead of querying the real system.
//!
//! # Platform Support
//! - macOS: Uses `lsof` and `ps` commands
//! - Linux: Uses the `ss` command and `/proc`

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod probe;

// Re-export domain types (primary API)
pub use domain::{
    ListeningSocket, PortOwner, ProcessInfo, ProcessType, Protocol, SnapshotEntry, SockState,
    TerminationOutcome,
};

// Re-export other commonly used types
pub use adapters::{SystemProcessTable, SystemSignaller, SystemSocketTable};
pub use application::{OwnerService, SnapshotService};
pub use config::{Config, ConfigStore};
pub use error::{Error, Result};
pub use probe::{PortProbe, PortSpec, ScanReport};
