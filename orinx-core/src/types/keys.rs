//! Ephemeral key types.
//!
//! The payer publishes a one-time public key with every announcement so the
//! recipient can recompute the shared secret for that payment. The core only
//! fixes the field shape (two 32-byte coordinates); it never checks that the
//! coordinates lie on any curve.

use serde::{Deserialize, Serialize};

use crate::constants::EPHEMERAL_COORDINATE_SIZE;
use crate::error::{OrinxError, Result};

/// A payer's one-time public key, as two fixed-size coordinates.
///
/// Relayed verbatim into the emitted [`Announcement`](crate::Announcement);
/// the core neither stores nor reuses it beyond that.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EphemeralPublicKey {
    #[serde(with = "hex")]
    x: [u8; EPHEMERAL_COORDINATE_SIZE],
    #[serde(with = "hex")]
    y: [u8; EPHEMERAL_COORDINATE_SIZE],
}

impl EphemeralPublicKey {
    /// Creates a key from its two raw coordinates.
    ///
    /// # Errors
    /// Returns [`OrinxError::InvalidKeySize`] if either coordinate is not
    /// exactly `EPHEMERAL_COORDINATE_SIZE` bytes. Content is not otherwise
    /// inspected.
    pub fn from_coordinates(x: &[u8], y: &[u8]) -> Result<Self> {
        Ok(Self {
            x: Self::coordinate(x)?,
            y: Self::coordinate(y)?,
        })
    }

    /// Creates a key from two fixed-size arrays.
    pub fn from_arrays(
        x: [u8; EPHEMERAL_COORDINATE_SIZE],
        y: [u8; EPHEMERAL_COORDINATE_SIZE],
    ) -> Self {
        Self { x, y }
    }

    /// Returns the `x` coordinate.
    pub fn x(&self) -> &[u8; EPHEMERAL_COORDINATE_SIZE] {
        &self.x
    }

    /// Returns the `y` coordinate.
    pub fn y(&self) -> &[u8; EPHEMERAL_COORDINATE_SIZE] {
        &self.y
    }

    fn coordinate(bytes: &[u8]) -> Result<[u8; EPHEMERAL_COORDINATE_SIZE]> {
        if bytes.len() != EPHEMERAL_COORDINATE_SIZE {
            return Err(OrinxError::InvalidKeySize {
                expected: EPHEMERAL_COORDINATE_SIZE,
                actual: bytes.len(),
            });
        }

        let mut arr = [0u8; EPHEMERAL_COORDINATE_SIZE];
        arr.copy_from_slice(bytes);
        Ok(arr)
    }
}

impl std::fmt::Debug for EphemeralPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Only show the leading bytes of each coordinate for readability
        write!(
            f,
            "EphemeralPublicKey(x: {}.., y: {}..)",
            hex::encode(&self.x[..4]),
            hex::encode(&self.y[..4])
        )
    }
}
