//! Domain models, shared types, and error definitions.
//!
//! Foundation crate -- no I/O dependencies.

pub mod error;
pub mod types;

pub use alloy_primitives::Address;
pub use error::{RegistryError, RegistryResult, WhitelistError, WhitelistResult};
pub use types::{AdminState, Category, RegistryEvent, Role};
