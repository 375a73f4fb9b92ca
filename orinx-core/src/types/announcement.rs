//! Announcement types.
//!
//! An announcement is the public record of a stealth payment: enough
//! metadata for the intended recipient to recognize the payment as theirs,
//! and nothing that links it to the recipient on the public record.

use serde::{Deserialize, Serialize};

use super::{Address, EphemeralPublicKey};
use crate::constants::{EPHEMERAL_COORDINATE_SIZE, SCHEME_ID_SECP256K1};

/// The public record of a stealth payment.
///
/// Its existence is proof that the attached value actually moved: the
/// announcer only emits it after the transfer to `stealth_address` has
/// succeeded. Field order is part of the contract:
/// `(scheme_id, stealth_address, ephemeral_pub_key_x, ephemeral_pub_key_y, ciphertext)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Which stealth-derivation scheme produced the fields below.
    ///
    /// Always [`SCHEME_ID_SECP256K1`]; carried in the record so scanners
    /// can filter without assuming.
    pub scheme_id: u8,
    /// The one-time destination that received the forwarded value.
    pub stealth_address: Address,
    /// `x` coordinate of the payer's one-time public key.
    #[serde(with = "hex")]
    pub ephemeral_pub_key_x: [u8; EPHEMERAL_COORDINATE_SIZE],
    /// `y` coordinate of the payer's one-time public key.
    #[serde(with = "hex")]
    pub ephemeral_pub_key_y: [u8; EPHEMERAL_COORDINATE_SIZE],
    /// Opaque hint bytes, typically an encrypted tag letting the intended
    /// recipient confirm the match cheaply. May be empty.
    #[serde(with = "hex")]
    pub ciphertext: Vec<u8>,
}

impl Announcement {
    /// Creates an announcement under the reference scheme.
    pub fn new(
        stealth_address: Address,
        ephemeral_pub_key: &EphemeralPublicKey,
        ciphertext: Vec<u8>,
    ) -> Self {
        Self {
            scheme_id: SCHEME_ID_SECP256K1,
            stealth_address,
            ephemeral_pub_key_x: *ephemeral_pub_key.x(),
            ephemeral_pub_key_y: *ephemeral_pub_key.y(),
            ciphertext,
        }
    }
}
