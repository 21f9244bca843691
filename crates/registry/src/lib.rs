//! Access registry state machine, state snapshots, reporting, and event sinks.

pub mod registry;
pub mod reporter;
pub mod set;
pub mod sink;
pub mod snapshot;

pub use registry::AccessRegistry;
pub use set::AddressSet;
pub use snapshot::RegistrySnapshot;
