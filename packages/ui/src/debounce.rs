//! # Debounced, cancellable searches
//!
//! Two small primitives the recipe search is built from:
//!
//! - [`Debouncer`] coalesces a burst of triggers into one. Every
//!   [`Debouncer::trigger`] bumps a generation counter and returns a
//!   [`Pending`] whose [`settled`](Pending::settled) future sleeps for the
//!   quiet period and then reports whether it is still the newest trigger.
//!   Cancelling the task that awaits it is the fast path; the generation check
//!   guarantees a superseded timer never fires even if it was not cancelled.
//! - [`RequestSequence`] hands out increasing [`RequestTicket`]s. A response
//!   may only be applied while its ticket is still the latest, so a slow reply
//!   to an old query can never overwrite the result of a newer one.
//!
//! Both are `Clone` handles over shared atomics so they can be captured by
//! spawned tasks.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Platform-appropriate async sleep.
pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Coalesces rapid triggers into a single action after a quiet period.
#[derive(Clone, Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a new quiet period, superseding any pending one.
    pub fn trigger(&self) -> Pending {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        Pending {
            id,
            delay: self.delay,
            generation: Arc::clone(&self.generation),
        }
    }
}

/// One trigger of a [`Debouncer`].
#[derive(Debug)]
pub struct Pending {
    id: u64,
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Pending {
    /// Whether no newer trigger has happened since this one.
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::SeqCst) == self.id
    }

    /// Wait out the quiet period. Resolves to `true` only if this is still
    /// the newest trigger once the period has elapsed.
    pub async fn settled(self) -> bool {
        sleep(self.delay).await;
        self.is_current()
    }
}

/// Identity of one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Issues request tickets and tells whether a ticket is still the latest.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket for a new request; every earlier ticket becomes stale.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
