//! Protocol constants for Orinx.
//!
//! These fix the sizes and identifiers the on-ledger core guarantees to
//! off-ledger collaborators (key derivation, announcement scanners).

// ═══════════════════════════════════════════════════════════════════════════════
// ANNOUNCEMENT SCHEME
// ═══════════════════════════════════════════════════════════════════════════════

/// Scheme identifier for the reference secp256k1 stealth-derivation scheme.
///
/// Every announcement the core emits carries this value. The field shape
/// (two 32-byte coordinates plus a ciphertext) is defined by this scheme;
/// no other scheme is supported.
pub const SCHEME_ID_SECP256K1: u8 = 1;

/// Size of each ephemeral public key coordinate in bytes.
///
/// The payer's one-time public key is published as two fixed-size
/// coordinates (`x`, `y`). Their curve structure is never validated by
/// the core.
pub const EPHEMERAL_COORDINATE_SIZE: usize = 32;

// ═══════════════════════════════════════════════════════════════════════════════
// ACCOUNTS & VALUE
// ═══════════════════════════════════════════════════════════════════════════════

/// Size of an account identifier in bytes (20 bytes = 160 bits).
pub const ADDRESS_SIZE: usize = 20;

/// Smallest value units per whole ether (10^18).
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

// ═══════════════════════════════════════════════════════════════════════════════
// EVENT LOG
// ═══════════════════════════════════════════════════════════════════════════════

/// Sequence number assigned to the first event appended to a log.
pub const FIRST_SEQUENCE: u64 = 1;
