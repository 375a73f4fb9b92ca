//! Error types for Orinx.
//!
//! A single error hierarchy using `thiserror`. Every failure surfaces
//! synchronously as the outcome of the call that triggered it, and every
//! failing call leaves no partial state behind.

use thiserror::Error;

use crate::types::Address;

/// Result type alias using `OrinxError`.
pub type Result<T> = std::result::Result<T, OrinxError>;

/// Main error type for all Orinx operations.
#[derive(Debug, Error)]
pub enum OrinxError {
    // ═══════════════════════════════════════════════════════════════════════════
    // REGISTRY ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The name is already bound to a registrant.
    ///
    /// First successful registration wins; this is permanent for the name,
    /// regardless of which account retries.
    #[error("name already registered: {name}")]
    NameTaken {
        /// The contested name.
        name: String,
    },

    // ═══════════════════════════════════════════════════════════════════════════
    // ANNOUNCER ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// The destination refused the attached value.
    ///
    /// No value moved and no announcement was emitted.
    #[error("transfer to {to} failed: {reason}")]
    TransferFailed {
        /// The stealth address that rejected the transfer.
        to: Address,
        /// Backend-supplied rejection reason.
        reason: String,
    },

    /// The sender's balance cannot cover the attached value.
    #[error("insufficient funds in {account}: needed {needed}, available {available}")]
    InsufficientFunds {
        /// The paying account.
        account: Address,
        /// Value the call tried to move.
        needed: u128,
        /// Balance actually held.
        available: u128,
    },

    /// A call re-entered a component whose previous call is still in flight.
    #[error("reentrant call rejected")]
    ReentrantCall,

    // ═══════════════════════════════════════════════════════════════════════════
    // VALIDATION ERRORS
    // ═══════════════════════════════════════════════════════════════════════════

    /// Invalid key or address size.
    ///
    /// Rejected before any state mutation.
    #[error("invalid key: expected {expected} bytes, got {actual}")]
    InvalidKeySize {
        /// Required byte length.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Invalid hex encoding.
    #[error("invalid hex encoding: {0}")]
    HexError(#[from] hex::FromHexError),
}

impl OrinxError {
    /// Returns true if retrying the same call can never succeed.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            OrinxError::NameTaken { .. }
                | OrinxError::InvalidKeySize { .. }
                | OrinxError::HexError(_)
        )
    }

    /// Returns true if the input was rejected before any state changed.
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            OrinxError::InvalidKeySize { .. } | OrinxError::HexError(_)
        )
    }
}
