//! Cooperative cancellation for long-running searches.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A cancellation token backed by a shared [`AtomicBool`].
///
/// Clones share the same flag: cancelling any clone cancels all of them.
/// Searches poll it between node expansions, so cancellation takes effect
/// within one expansion step.
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let ctx = Context::new();
        let other = ctx.clone();
        assert!(!other.is_done());
        ctx.cancel();
        assert!(other.is_done());
    }

    #[test]
    fn cancel_is_visible_across_threads() {
        let ctx = Context::default();
        let remote = ctx.clone();
        std::thread::spawn(move || remote.cancel())
            .join()
            .expect("cancel thread panicked");
        assert!(ctx.is_done());
    }
}
