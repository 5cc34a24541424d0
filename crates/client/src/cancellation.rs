use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Soft cancellation flag shared between a load and whoever may supersede it.
///
/// Cancelling never aborts the request in flight. The load checks the flag once
/// the response arrives and discards it instead of applying it.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// What happened to a completed load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The response was written into the session
    Applied,
    /// The token was cancelled before the response arrived
    Discarded,
}
