//! Centralized error types for the whitelist workspace.

use alloy_primitives::Address;
use thiserror::Error;

/// Conditions under which the registry rejects a call.
///
/// Any of these aborts the whole call: nothing from the batch is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("zero address is not a valid registry entry")]
    ZeroAddress,

    #[error("address {0} is blacklisted")]
    Blacklisted(Address),

    #[error("caller {0} is not the admin")]
    NotAnAdmin(Address),

    #[error("caller {0} is neither an operator nor the admin")]
    NotAnOperatorOrAdmin(Address),

    #[error("caller {0} is not the pending admin")]
    NotPendingAdmin(Address),
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Top-level error enum. Variants map to subsystems.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WhitelistError {
    #[error("Registry rejected call: {0}")]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Deployment failed: {0}")]
    Deploy(String),

    #[error("Invalid registry state: {0}")]
    InvalidState(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type WhitelistResult<T> = Result<T, WhitelistError>;
