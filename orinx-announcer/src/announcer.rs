//! The stealth announcer.
//!
//! Couples the value transfer and the announcement into one atomic action:
//! a recipient scanning the feed never sees an announcement whose funds did
//! not actually move.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use orinx_core::error::{OrinxError, Result};
use orinx_core::log::{EventLog, Sequenced};
use orinx_core::traits::{AnnouncementFeed, ValueTransfer};
use orinx_core::types::{Address, Amount, Announcement, EphemeralPublicKey};

/// The Stealth Announcer.
///
/// Holds no long-lived state besides its append-only announcement log. The
/// ephemeral key and ciphertext are relayed verbatim into the emitted
/// record, never inspected or reused.
///
/// Calls are all-or-nothing: input validation happens before any effect,
/// the transfer happens through the [`ValueTransfer`] capability, and the
/// announcement is appended only once the transfer has succeeded. A
/// per-instance in-flight flag rejects nested calls, so a transfer backend
/// that calls back in cannot observe or exploit a half-finished call.
#[derive(Debug)]
pub struct StealthAnnouncer<L: ValueTransfer> {
    ledger: Arc<L>,
    announcements: EventLog<Announcement>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path.
struct CallGuard<'a>(&'a AtomicBool);

impl<'a> CallGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| OrinxError::ReentrantCall)?;
        Ok(Self(flag))
    }
}

impl Drop for CallGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<L: ValueTransfer> StealthAnnouncer<L> {
    /// Creates an announcer backed by the given transfer capability.
    pub fn new(ledger: Arc<L>) -> Self {
        Self {
            ledger,
            announcements: EventLog::new(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Transfers `value` to `stealth_address` and announces the payment.
    ///
    /// On success the full `value` has been credited to `stealth_address`
    /// and `Announcement(scheme_id = 1, stealth_address, x, y, ciphertext)`
    /// has been appended; the returned sequence identifies it in the feed.
    ///
    /// On any failure nothing happened: malformed coordinates are rejected
    /// before the transfer is attempted, and a failed transfer emits no
    /// announcement.
    #[instrument(skip(self, x, y, ciphertext), fields(ciphertext_len = ciphertext.len()))]
    pub async fn send_stealth(
        &self,
        caller: Address,
        x: &[u8],
        y: &[u8],
        ciphertext: Vec<u8>,
        stealth_address: Address,
        value: Amount,
    ) -> Result<u64> {
        let _guard = CallGuard::acquire(&self.in_flight)?;

        // Validate before any effect
        let ephemeral_pub_key = EphemeralPublicKey::from_coordinates(x, y)?;

        // The announcement is only appended once the value has moved, so
        // its existence is proof of successful transfer.
        self.ledger.transfer(caller, stealth_address, value).await?;

        let announcement = Announcement::new(stealth_address, &ephemeral_pub_key, ciphertext);
        let seq = self.announcements.append(announcement);

        debug!(%caller, %stealth_address, value, seq, "stealth payment announced");
        Ok(seq)
    }

    /// Returns the full announcement history in ledger order.
    pub fn announcements(&self) -> Vec<Sequenced<Announcement>> {
        self.announcements.all()
    }

    /// Returns the number of announcements emitted so far.
    pub fn len(&self) -> u64 {
        self.announcements.len()
    }

    /// Returns true if nothing has been announced.
    pub fn is_empty(&self) -> bool {
        self.announcements.is_empty()
    }
}

#[async_trait]
impl<L: ValueTransfer> AnnouncementFeed for StealthAnnouncer<L> {
    async fn get(&self, seq: u64) -> Result<Option<Sequenced<Announcement>>> {
        Ok(self.announcements.get(seq))
    }

    async fn range(&self, start: u64, end: u64) -> Result<Vec<Sequenced<Announcement>>> {
        Ok(self.announcements.range(start, end))
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.announcements.len())
    }
}
