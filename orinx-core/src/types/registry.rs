//! Registry record and event types.

use serde::{Deserialize, Serialize};

use super::Address;

/// The state bound to a registered name.
///
/// Created exactly once per name and immutable afterwards: neither `owner`
/// nor `meta_address` ever changes for the registry's lifetime.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaAddressRecord {
    /// The account that performed the registration.
    pub owner: Address,
    /// The registrant's published public-key bundle.
    ///
    /// Opaque to the core; its format is a contract between the registrant
    /// and the off-ledger derivation logic. Empty is accepted.
    #[serde(with = "hex")]
    pub meta_address: Vec<u8>,
}

/// Event emitted on every successful registration.
///
/// Field order is part of the contract: `(name, owner, meta_address)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsernameRegistered {
    /// The newly bound name.
    pub name: String,
    /// The registrant.
    pub owner: Address,
    /// The published meta-address bytes, verbatim.
    #[serde(with = "hex")]
    pub meta_address: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serde_roundtrip() {
        let record = MetaAddressRecord {
            owner: Address::from_array([0x11; 20]),
            meta_address: b"meta-address-mock-data".to_vec(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: MetaAddressRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn test_empty_meta_address_is_representable() {
        let record = MetaAddressRecord {
            owner: Address::zero(),
            meta_address: Vec::new(),
        };
        assert!(record.meta_address.is_empty());
    }
}
