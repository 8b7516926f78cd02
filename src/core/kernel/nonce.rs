use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Source of wall-clock time in whole Unix seconds
pub trait Clock: Send + Sync {
    fn unix_seconds(&self) -> i64;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn unix_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }
}

/// Issues strictly increasing nonces for one set of credentials.
///
/// Nonces follow the wall clock in seconds. When the clock has not advanced past
/// the last issued value (several calls in one second, or the clock moved
/// backwards) the next nonce is `last + 1` instead.
pub struct NonceSequencer {
    last: Mutex<i64>,
    clock: Arc<dyn Clock>,
}

impl NonceSequencer {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            last: Mutex::new(0),
            clock,
        }
    }

    /// Sequencer whose first nonce is greater than `last`
    pub fn starting_after(last: i64) -> Self {
        let sequencer = Self::new();
        *sequencer.last.lock() = last;
        sequencer
    }

    /// Move the floor up to `last` if it is ahead of what was issued so far
    pub fn advance_to(&self, last: i64) {
        let mut guard = self.last.lock();
        if last > *guard {
            *guard = last;
        }
    }

    pub fn next(&self) -> i64 {
        self.next_with(|nonce| nonce)
    }

    /// Issue a nonce and run `build` with it while still holding the sequencer lock.
    ///
    /// Callers sharing the sequencer across tasks build the request body inside
    /// `build` so that no other nonce is issued in between.
    pub fn next_with<T>(&self, build: impl FnOnce(i64) -> T) -> T {
        let mut last = self.last.lock();
        let now = self.clock.unix_seconds();
        let nonce = if now <= *last {
            last.saturating_add(1)
        } else {
            now
        };
        *last = nonce;
        build(nonce)
    }

    /// The most recently issued nonce, 0 if none was issued yet
    pub fn last(&self) -> i64 {
        *self.last.lock()
    }
}

impl Default for NonceSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NonceSequencer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NonceSequencer")
            .field("last", &self.last())
            .finish_non_exhaustive()
    }
}
