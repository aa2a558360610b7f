//! Application layer - Use case services.
//!
//! Services compose the port traits into the operations the CLI exposes.
//! They are stateless between calls: every invocation re-enumerates the
//! socket table from scratch, trading a cheap re-scan for simplicity.

mod owner;
mod snapshot;

pub use owner::OwnerService;
pub use snapshot::SnapshotService;
