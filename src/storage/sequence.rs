use lazy_static::lazy_static;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

lazy_static! {
    /// Sequence shared by every store that does not bring its own
    static ref PROCESS_SEQUENCE: IdSequence = IdSequence::new();
}

/// Monotonic counter behind generated record identifiers.
///
/// Clones share the same counter. `IdSequence::shared()` hands out the
/// process-wide sequence, so identifiers stay distinct across store instances;
/// `IdSequence::new()` gives an isolated one starting at 1.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: Arc<AtomicU64>,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: Arc::new(AtomicU64::new(first)),
        }
    }

    /// Handle to the process-wide sequence
    pub fn shared() -> Self {
        PROCESS_SEQUENCE.clone()
    }

    /// Take the next value
    pub fn next_value(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    /// Value the next call to `next_value` will return
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }

    pub fn reset(&self) {
        self.next.store(1, Ordering::SeqCst);
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
