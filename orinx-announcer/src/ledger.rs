//! In-memory value ledger.
//!
//! A [`ValueTransfer`] backend modeling the hosting ledger's account
//! balances, including destinations that refuse incoming value (the way a
//! contract without a receive hook would).

use async_trait::async_trait;
use dashmap::{DashMap, DashSet};
use tracing::{debug, instrument};

use orinx_core::error::{OrinxError, Result};
use orinx_core::traits::ValueTransfer;
use orinx_core::types::{Address, Amount};

/// In-memory account ledger.
///
/// Balances start at zero; [`mint`](MemoryLedger::mint) funds accounts for
/// use as payers. Destinations marked via
/// [`set_rejects_value`](MemoryLedger::set_rejects_value) refuse every
/// incoming transfer, including zero-value ones.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    balances: DashMap<Address, Amount>,
    rejecting: DashSet<Address>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self {
            balances: DashMap::new(),
            rejecting: DashSet::new(),
        }
    }

    /// Credits `amount` to `account` out of thin air.
    pub fn mint(&self, account: Address, amount: Amount) {
        *self.balances.entry(account).or_insert(0) += amount;
    }

    /// Marks whether `account` refuses incoming transfers.
    pub fn set_rejects_value(&self, account: Address, rejects: bool) {
        if rejects {
            self.rejecting.insert(account);
        } else {
            self.rejecting.remove(&account);
        }
    }
}

#[async_trait]
impl ValueTransfer for MemoryLedger {
    /// Moves `amount` from `from` to `to`, all or nothing.
    ///
    /// The rejection and balance checks both happen before either account
    /// is touched, and the debit is performed under the sender's entry
    /// guard, so a failed transfer leaves every balance as it was.
    #[instrument(skip(self))]
    async fn transfer(&self, from: Address, to: Address, amount: Amount) -> Result<()> {
        if self.rejecting.contains(&to) {
            return Err(OrinxError::TransferFailed {
                to,
                reason: "destination rejects incoming value".into(),
            });
        }

        {
            let mut sender = self.balances.entry(from).or_insert(0);
            if *sender < amount {
                return Err(OrinxError::InsufficientFunds {
                    account: from,
                    needed: amount,
                    available: *sender,
                });
            }
            *sender -= amount;
        }

        *self.balances.entry(to).or_insert(0) += amount;

        debug!(%from, %to, amount, "value transferred");
        Ok(())
    }

    async fn balance_of(&self, account: Address) -> Result<Amount> {
        Ok(self.balances.get(&account).map(|b| *b).unwrap_or(0))
    }
}
