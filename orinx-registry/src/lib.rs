//! # Orinx Registry
//!
//! The Identity Registry of the Orinx protocol: a persistent mapping from a
//! human-chosen name to its registrant and published meta-address.
//!
//! Registration is first come, first served, and permanent: once a name is
//! bound, its record never changes and the name is never released.
//!
//! ## Example
//!
//! ```rust,ignore
//! use orinx_registry::MemoryNameRegistry;
//! use orinx_core::NameRegistry;
//!
//! let registry = MemoryNameRegistry::new();
//!
//! // Recipient publishes a meta-address under a name
//! registry.register_username(alice, "alice", meta_bytes).await?;
//!
//! // Payers resolve the name before deriving a stealth address
//! let owner = registry.lookup_owner("alice").await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod memory;

pub use memory::MemoryNameRegistry;

// Re-export the trait from core
pub use orinx_core::traits::NameRegistry;
