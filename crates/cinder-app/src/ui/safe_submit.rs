//! # Safe Submit
//!
//! Guards a submit callback against duplicate invocation.
//!
//! The first submit passes through and disarms the guard. Later submits are
//! dropped until the watched flag (for delete confirmation, `deleting`)
//! changes value between two observed props, which re-arms it. While the
//! last observed flag is set, every submit is dropped, including the first.

use super::callback::Callback;

/// Duplicate-submission guard for one callback
#[derive(Clone, Debug, Default)]
pub struct SafeSubmit {
    submitted: bool,
    last_flag: Option<bool>,
}

impl SafeSubmit {
    /// Create an armed guard
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the watched flag from freshly derived props.
    ///
    /// A change relative to the previous observation re-arms the guard.
    pub fn observe(&mut self, flag: bool) {
        if self.last_flag.is_some_and(|last| last != flag) {
            self.submitted = false;
        }
        self.last_flag = Some(flag);
    }

    /// Invoke `callback` unless a submit is already pending or the watched
    /// flag is set.
    ///
    /// Returns whether the callback ran.
    pub fn submit(&mut self, callback: &Callback) -> bool {
        if self.is_busy() {
            tracing::debug!("Submit suppressed while operation in flight");
            return false;
        }
        if self.submitted {
            tracing::debug!("Duplicate submit suppressed");
            return false;
        }
        self.submitted = true;
        callback.call();
        true
    }

    /// Check if the next submit would pass through
    pub fn is_armed(&self) -> bool {
        !self.submitted && !self.is_busy()
    }

    /// Check if the last observed flag is set
    pub fn is_busy(&self) -> bool {
        self.last_flag == Some(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting() -> (Callback, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let cb = Callback::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (cb, hits)
    }

    #[test]
    fn test_second_submit_is_dropped() {
        let (cb, hits) = counting();
        let mut guard = SafeSubmit::new();
        guard.observe(false);

        assert!(guard.submit(&cb));
        assert!(!guard.submit(&cb));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!guard.is_armed());
    }

    #[test]
    fn test_unchanged_flag_keeps_guard_closed() {
        let (cb, hits) = counting();
        let mut guard = SafeSubmit::new();
        guard.observe(false);
        guard.submit(&cb);

        guard.observe(false);
        assert!(!guard.submit(&cb));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_flag_change_rearms() {
        let (cb, hits) = counting();
        let mut guard = SafeSubmit::new();
        guard.observe(false);
        guard.submit(&cb);

        // deleting goes true, then back to false
        guard.observe(true);
        assert!(guard.is_busy());
        assert!(!guard.is_armed());
        guard.observe(false);
        assert!(guard.is_armed());
        assert!(guard.submit(&cb));
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_set_flag_blocks_first_submit() {
        let (cb, hits) = counting();
        let mut guard = SafeSubmit::new();
        guard.observe(true);

        assert!(!guard.submit(&cb));
        assert!(!guard.submit(&cb));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unobserved_guard_is_armed() {
        let (cb, hits) = counting();
        let mut guard = SafeSubmit::new();
        assert!(guard.is_armed());
        assert!(guard.submit(&cb));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
