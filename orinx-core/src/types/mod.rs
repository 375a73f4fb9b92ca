//! Domain types for Orinx.
//!
//! This module provides the data structures shared by both components:
//!
//! - [`Address`]: 20-byte account identifier
//! - [`EphemeralPublicKey`]: the payer's one-time public key (two coordinates)
//! - [`MetaAddressRecord`] / [`UsernameRegistered`]: registry state and event
//! - [`Announcement`]: the public record of a stealth payment

mod address;
mod announcement;
mod keys;
mod registry;

pub use address::*;
pub use announcement::*;
pub use keys::*;
pub use registry::*;

/// Transferable value amount, denominated in wei.
pub type Amount = u128;
