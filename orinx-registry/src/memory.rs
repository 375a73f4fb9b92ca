//! In-memory name registry.
//!
//! Backs the registry state with concurrent structures so calls serialized
//! by the hosting environment need no extra locking, and concurrent use in
//! tests stays safe.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, instrument};

use orinx_core::error::{OrinxError, Result};
use orinx_core::log::{EventLog, Sequenced};
use orinx_core::traits::NameRegistry;
use orinx_core::types::{Address, MetaAddressRecord, UsernameRegistered};

/// In-memory implementation of the Identity Registry.
///
/// Holds the name → record mapping plus the append-only registration event
/// log. Names are case-sensitive and their records are immutable once
/// written: the only mutation ever applied per key is its first insert.
#[derive(Debug, Default)]
pub struct MemoryNameRegistry {
    /// Primary storage: name → record, written at most once per key.
    records: DashMap<String, MetaAddressRecord>,
    /// Registration history, in ledger order.
    events: EventLog<UsernameRegistered>,
}

impl MemoryNameRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            events: EventLog::new(),
        }
    }

    /// Returns the full registration history in ledger order.
    pub fn events(&self) -> Vec<Sequenced<UsernameRegistered>> {
        self.events.all()
    }

    /// Returns the number of registered names.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl NameRegistry for MemoryNameRegistry {
    /// Registers a name, first come first served.
    ///
    /// The presence check and the insert happen under one map-entry guard,
    /// so no interleaving can bind the same name twice. The meta-address
    /// bytes are stored verbatim; the same account may register any number
    /// of names, and the same bytes may recur under different names.
    #[instrument(skip(self, meta_address), fields(meta_len = meta_address.len()))]
    async fn register_username(
        &self,
        caller: Address,
        name: &str,
        meta_address: Vec<u8>,
    ) -> Result<u64> {
        match self.records.entry(name.to_owned()) {
            Entry::Occupied(_) => {
                debug!(name, "registration rejected, name taken");
                return Err(OrinxError::NameTaken {
                    name: name.to_owned(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(MetaAddressRecord {
                    owner: caller,
                    meta_address: meta_address.clone(),
                });
            }
        }

        let seq = self.events.append(UsernameRegistered {
            name: name.to_owned(),
            owner: caller,
            meta_address,
        });

        debug!(name, owner = %caller, seq, "name registered");
        Ok(seq)
    }

    /// Returns the registrant of `name`, or `None` if unbound.
    async fn lookup_owner(&self, name: &str) -> Result<Option<Address>> {
        Ok(self.records.get(name).map(|r| r.owner))
    }

    /// Returns the full record for `name`, or `None` if unbound.
    async fn lookup_record(&self, name: &str) -> Result<Option<MetaAddressRecord>> {
        Ok(self.records.get(name).map(|r| r.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(byte: u8) -> Address {
        Address::from_array([byte; 20])
    }

    #[tokio::test]
    async fn test_register_and_lookup() {
        let registry = MemoryNameRegistry::new();
        let alice = account(0xA1);

        let seq = registry
            .register_username(alice, "alice", b"meta-address-mock-data".to_vec())
            .await
            .unwrap();
        assert_eq!(seq, 1);

        assert_eq!(registry.lookup_owner("alice").await.unwrap(), Some(alice));

        let record = registry.lookup_record("alice").await.unwrap().unwrap();
        assert_eq!(record.owner, alice);
        assert_eq!(record.meta_address, b"meta-address-mock-data");
    }

    #[tokio::test]
    async fn test_registration_emits_event_in_argument_order() {
        let registry = MemoryNameRegistry::new();
        let alice = account(0xA1);

        registry
            .register_username(alice, "alice", b"meta-address-mock-data".to_vec())
            .await
            .unwrap();

        let events = registry.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].seq, 1);

        let UsernameRegistered {
            name,
            owner,
            meta_address,
        } = &events[0].event;
        assert_eq!(name, "alice");
        assert_eq!(*owner, alice);
        assert_eq!(meta_address, b"meta-address-mock-data");
    }

    #[tokio::test]
    async fn test_duplicate_name_rejected() {
        let registry = MemoryNameRegistry::new();
        let alice = account(0xA1);

        registry
            .register_username(alice, "bob", b"meta-address-1".to_vec())
            .await
            .unwrap();

        // Even the original owner cannot re-register
        let result = registry
            .register_username(alice, "bob", b"meta-address-2".to_vec())
            .await;
        assert!(matches!(result, Err(OrinxError::NameTaken { name }) if name == "bob"));

        // And neither can anyone else
        let result = registry
            .register_username(account(0xB2), "bob", b"meta-address-3".to_vec())
            .await;
        assert!(matches!(result, Err(OrinxError::NameTaken { .. })));

        // The original binding is untouched, and no extra event was emitted
        let record = registry.lookup_record("bob").await.unwrap().unwrap();
        assert_eq!(record.owner, alice);
        assert_eq!(record.meta_address, b"meta-address-1");
        assert_eq!(registry.events().len(), 1);
    }

    #[tokio::test]
    async fn test_lookup_unbound_name_is_none() {
        let registry = MemoryNameRegistry::new();
        assert_eq!(registry.lookup_owner("nobody").await.unwrap(), None);
        assert!(registry.lookup_record("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_names_are_case_sensitive() {
        let registry = MemoryNameRegistry::new();
        let alice = account(0xA1);
        let bob = account(0xB2);

        registry
            .register_username(alice, "carol", b"m1".to_vec())
            .await
            .unwrap();
        registry
            .register_username(bob, "Carol", b"m2".to_vec())
            .await
            .unwrap();

        assert_eq!(registry.lookup_owner("carol").await.unwrap(), Some(alice));
        assert_eq!(registry.lookup_owner("Carol").await.unwrap(), Some(bob));
    }

    #[tokio::test]
    async fn test_meta_address_is_not_validated() {
        let registry = MemoryNameRegistry::new();
        let alice = account(0xA1);

        // Empty meta-address is accepted verbatim
        registry
            .register_username(alice, "empty", Vec::new())
            .await
            .unwrap();
        let record = registry.lookup_record("empty").await.unwrap().unwrap();
        assert!(record.meta_address.is_empty());

        // The same bytes may recur under different names
        registry
            .register_username(alice, "one", b"shared".to_vec())
            .await
            .unwrap();
        registry
            .register_username(account(0xB2), "two", b"shared".to_vec())
            .await
            .unwrap();
        assert_eq!(registry.len(), 3);
    }

    #[tokio::test]
    async fn test_one_account_many_names() {
        let registry = MemoryNameRegistry::new();
        let alice = account(0xA1);

        for name in ["a", "b", "c"] {
            registry
                .register_username(alice, name, b"m".to_vec())
                .await
                .unwrap();
            assert_eq!(registry.lookup_owner(name).await.unwrap(), Some(alice));
        }
        assert_eq!(registry.events().len(), 3);
    }

    #[tokio::test]
    async fn test_concurrent_registration_single_winner() {
        use std::sync::Arc;
        use tokio::task::JoinSet;

        let registry = Arc::new(MemoryNameRegistry::new());
        let mut tasks = JoinSet::new();

        for i in 0..32u8 {
            let reg = registry.clone();
            tasks.spawn(async move {
                reg.register_username(account(i), "contested", vec![i])
                    .await
                    .is_ok()
            });
        }

        let mut winners = 0;
        while let Some(result) = tasks.join_next().await {
            if result.unwrap() {
                winners += 1;
            }
        }

        // Exactly one registration wins, and exactly one event exists
        assert_eq!(winners, 1);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.events().len(), 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_second_registration_never_succeeds(
                name in "[a-zA-Z0-9._-]{1,32}",
                meta1 in proptest::collection::vec(any::<u8>(), 0..64),
                meta2 in proptest::collection::vec(any::<u8>(), 0..64),
            ) {
                tokio_test::block_on(async {
                    let registry = MemoryNameRegistry::new();
                    let first = account(1);

                    registry.register_username(first, &name, meta1.clone()).await.unwrap();
                    let retry = registry.register_username(account(2), &name, meta2).await;

                    prop_assert!(
                        matches!(retry, Err(OrinxError::NameTaken { .. })),
                        "expected NameTaken error"
                    );

                    let record = registry.lookup_record(&name).await.unwrap().unwrap();
                    prop_assert_eq!(record.owner, first);
                    prop_assert_eq!(record.meta_address, meta1);
                    Ok(())
                })?;
            }
        }
    }
}
