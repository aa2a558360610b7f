//! Domain layer - Pure business logic and data models.
//!
//! This module contains domain entities that represent core business concepts.
//! These types have no I/O dependencies and can be tested in isolation.

mod owner;
mod process;
mod process_type;
mod snapshot;
mod socket;

// Re-export all domain types
pub use owner::{PortOwner, TerminationOutcome};
pub use process::ProcessInfo;
pub use process_type::ProcessType;
pub use snapshot::SnapshotEntry;
pub use socket::{ListeningSocket, Protocol, SockState};
