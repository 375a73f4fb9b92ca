//! Common traits for Orinx.
//!
//! These traits are the seams between the two on-ledger components and
//! their collaborators: the hosting ledger underneath, and off-ledger
//! scanners on top.

use async_trait::async_trait;

use crate::error::Result;
use crate::log::Sequenced;
use crate::types::{Address, Amount, Announcement, MetaAddressRecord};

// ═══════════════════════════════════════════════════════════════════════════════
// NAME REGISTRY TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Interface of the Identity Registry.
///
/// Binds human-chosen names to meta-addresses, first come first served.
#[async_trait]
pub trait NameRegistry: Send + Sync {
    /// Registers `name` to `caller` with the given meta-address bytes.
    ///
    /// Returns the sequence of the emitted `UsernameRegistered` event.
    /// Fails with [`OrinxError::NameTaken`](crate::OrinxError::NameTaken)
    /// if the name is already bound, leaving no state change behind.
    async fn register_username(
        &self,
        caller: Address,
        name: &str,
        meta_address: Vec<u8>,
    ) -> Result<u64>;

    /// Returns the registrant of `name`, or `None` if unbound.
    ///
    /// Pure read: never an error for an unbound name.
    async fn lookup_owner(&self, name: &str) -> Result<Option<Address>>;

    /// Returns the full record for `name`, or `None` if unbound.
    async fn lookup_record(&self, name: &str) -> Result<Option<MetaAddressRecord>>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// VALUE TRANSFER TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Capability for moving value between accounts.
///
/// The announcer invokes this only after all of its own bookkeeping for a
/// call is finalized, so an implementation that calls back into the
/// announcer can never observe half-updated state.
#[async_trait]
pub trait ValueTransfer: Send + Sync {
    /// Moves `amount` from `from` to `to`, all or nothing.
    ///
    /// Fails with [`OrinxError::TransferFailed`](crate::OrinxError::TransferFailed)
    /// if the destination rejects incoming value, or
    /// [`OrinxError::InsufficientFunds`](crate::OrinxError::InsufficientFunds)
    /// if the sender cannot cover it.
    async fn transfer(&self, from: Address, to: Address, amount: Amount) -> Result<()>;

    /// Returns the current balance of `account` (zero if never funded).
    async fn balance_of(&self, account: Address) -> Result<Amount>;
}

// ═══════════════════════════════════════════════════════════════════════════════
// ANNOUNCEMENT FEED TRAIT
// ═══════════════════════════════════════════════════════════════════════════════

/// Read side of the announcement log, for off-ledger scanners.
///
/// Recipients walk this feed and try to recompute each stealth address
/// from its ephemeral key using their own meta-address private material.
#[async_trait]
pub trait AnnouncementFeed: Send + Sync {
    /// Returns the announcement at `seq`, if one has been emitted.
    async fn get(&self, seq: u64) -> Result<Option<Sequenced<Announcement>>>;

    /// Returns announcements with `start <= seq <= end`, in ledger order.
    async fn range(&self, start: u64, end: u64) -> Result<Vec<Sequenced<Announcement>>>;

    /// Returns the total number of announcements emitted so far.
    async fn count(&self) -> Result<u64>;
}
