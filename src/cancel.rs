use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable handle for cooperatively cancelling a long-running computation.
///
/// The exact solver checks the flag once per color budget and the estimator once per
/// trial, so cancellation takes effect at the next loop boundary rather than
/// instantly. Clones share one flag; hand one clone to the computation and keep
/// another to [`cancel`](Self::cancel) from elsewhere.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// A fresh, unset flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Irrevocable for this flag and all its clones.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// The computation observed its [`CancelFlag`] and stopped early.
///
/// Distinct from a failure: the input may well have an answer, it just was not
/// computed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Cancelled;
