//! Error handling for the wallet coordinator
//!
//! Two error shapes live here. `WalletError` is the store-side error type:
//! every `WalletStore` operation fails with it. `ErrorEnvelope` is the
//! observer-facing shape: the coordinator catches every store failure at its
//! boundary and classifies it to an envelope before publishing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wallet store error type
#[derive(Error, Debug, Clone)]
pub enum WalletError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    #[error("No default wallet set")]
    NoDefaultWallet,

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a wallet not found error
    pub fn wallet_not_found(message: impl Into<String>) -> Self {
        Self::WalletNotFound(message.into())
    }

    /// Create an invalid password error
    pub fn invalid_password(message: impl Into<String>) -> Self {
        Self::InvalidPassword(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

// Standard library error conversions
impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(format!("JSON error: {}", err))
    }
}

impl From<tokio::task::JoinError> for WalletError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Task join error: {}", err))
    }
}

/// Classification of observer-facing errors.
///
/// The coordinator does not derive a finer taxonomy from the underlying
/// store failure; everything surfaces as `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    Unknown,
}

/// The only error shape surfaced to observers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: ErrorKind,
    pub message: String,
}

impl ErrorEnvelope {
    /// Create an envelope with the `Unknown` classification
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            code: ErrorKind::Unknown,
            message: message.into(),
        }
    }
}

impl From<WalletError> for ErrorEnvelope {
    fn from(err: WalletError) -> Self {
        Self::unknown(err.to_string())
    }
}
