//! # Orinx Announcer
//!
//! The Stealth Announcer of the Orinx protocol: forwards attached value to a
//! freshly derived one-time address and publishes the announcement the
//! recipient needs to detect the payment, as one atomic unit of work.
//!
//! An announcement only exists if its transfer succeeded, so a scanning
//! recipient never has to verify delivery separately.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use orinx_announcer::{MemoryLedger, StealthAnnouncer};
//!
//! let ledger = Arc::new(MemoryLedger::new());
//! let announcer = StealthAnnouncer::new(ledger.clone());
//!
//! // Payer: derived off-ledger from the recipient's meta-address
//! let seq = announcer
//!     .send_stealth(payer, &eph_x, &eph_y, ciphertext, stealth_addr, value)
//!     .await?;
//!
//! // Recipient: scan the feed and try to recompute each stealth address
//! for entry in announcer.announcements() {
//!     // ... off-ledger matching
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod announcer;
mod ledger;

pub use announcer::StealthAnnouncer;
pub use ledger::MemoryLedger;

// Re-export the traits from core
pub use orinx_core::traits::{AnnouncementFeed, ValueTransfer};
