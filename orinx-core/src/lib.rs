//! # Orinx Core
//!
//! Core types, errors, and traits for the Orinx stealth-address payment protocol.
//!
//! This crate provides the foundational building blocks used by the other
//! Orinx crates:
//!
//! - **Types**: Domain models for accounts, ephemeral keys, registry records,
//!   and announcements
//! - **Errors**: The protocol error type with context
//! - **Constants**: Protocol constants and sizes
//! - **Log**: The append-only, ledger-ordered event log
//! - **Traits**: Interfaces for the registry, value transfer, and announcement
//!   scanning
//!
//! ## Example
//!
//! ```rust
//! use orinx_core::{Address, Announcement, OrinxError};
//!
//! // Types are serializable and well-documented
//! let addr = Address::zero();
//! let json = serde_json::to_string(&addr).unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod log;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{OrinxError, Result};
pub use log::{EventLog, Sequenced};
pub use traits::*;
pub use types::*;
