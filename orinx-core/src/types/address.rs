//! Account identifiers.
//!
//! An [`Address`] names an account on the hosting ledger: a registrant, a
//! payer, or a one-time stealth destination. The core treats all three the
//! same way.

use serde::{Deserialize, Serialize};

use crate::constants::ADDRESS_SIZE;
use crate::error::{OrinxError, Result};

/// A 20-byte account identifier.
///
/// Used for registrants, payers, and stealth destinations alike. Whether a
/// given address can accept value is a property of the hosting ledger, not
/// of the address itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    #[serde(with = "hex")]
    bytes: [u8; ADDRESS_SIZE],
}

impl Address {
    /// Creates an address from raw bytes.
    ///
    /// # Errors
    /// Returns [`OrinxError::InvalidKeySize`] if the slice is not exactly
    /// `ADDRESS_SIZE` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != ADDRESS_SIZE {
            return Err(OrinxError::InvalidKeySize {
                expected: ADDRESS_SIZE,
                actual: bytes.len(),
            });
        }

        let mut arr = [0u8; ADDRESS_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self { bytes: arr })
    }

    /// Creates an address from a fixed-size array.
    pub fn from_array(bytes: [u8; ADDRESS_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the address as a 0x-prefixed hex string.
    pub fn to_hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }

    /// Parses from a hex string (with or without 0x prefix).
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    /// Returns the zero address.
    pub fn zero() -> Self {
        Self {
            bytes: [0u8; ADDRESS_SIZE],
        }
    }

    /// Returns true if this is the zero address.
    pub fn is_zero(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0)
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address({})", self.to_hex_string())
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_formatting() {
        let addr = Address::from_array([0xAB; 20]);
        let s = addr.to_hex_string();
        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 42); // "0x" + 40 hex chars
    }

    #[test]
    fn test_address_hex_roundtrip() {
        let addr = Address::from_array([0x12; 20]);
        let hex = addr.to_hex_string();
        let addr2 = Address::from_hex(&hex).unwrap();
        assert_eq!(addr, addr2);
    }

    #[test]
    fn test_address_rejects_wrong_length() {
        let result = Address::from_bytes(&[0u8; 19]);
        assert!(matches!(
            result,
            Err(OrinxError::InvalidKeySize {
                expected: 20,
                actual: 19
            })
        ));
    }

    #[test]
    fn test_address_zero() {
        let zero = Address::zero();
        assert!(zero.is_zero());

        let non_zero = Address::from_array([1; 20]);
        assert!(!non_zero.is_zero());
    }
}
