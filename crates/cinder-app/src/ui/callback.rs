//! Callback handles carried in props

use std::fmt;
use std::sync::Arc;

/// Zero-argument callback stored in a props value.
///
/// A `Callback` is either wired to a closure or an explicit no-op. Keeping
/// the no-op distinguishable lets presentational code (and tests) tell a
/// disabled action from one that merely does nothing visible.
#[derive(Clone, Default)]
pub struct Callback(Option<Arc<dyn Fn() + Send + Sync>>);

impl Callback {
    /// Wrap a closure
    pub fn new<F>(f: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(Some(Arc::new(f)))
    }

    /// A callback that does nothing
    pub fn noop() -> Self {
        Self(None)
    }

    /// Invoke the callback
    pub fn call(&self) {
        if let Some(f) = &self.0 {
            f();
        }
    }

    /// Check if this callback is the no-op
    pub fn is_noop(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noop() {
            f.write_str("Callback(noop)")
        } else {
            f.write_str("Callback(..)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_wired_callback_runs() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let cb = Callback::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        cb.call();
        cb.clone().call();
        assert_eq!(hits.load(Ordering::SeqCst), 2);
        assert!(!cb.is_noop());
    }

    #[test]
    fn test_noop_is_default() {
        let cb = Callback::default();
        assert!(cb.is_noop());
        cb.call();
        assert_eq!(format!("{cb:?}"), "Callback(noop)");
    }
}
