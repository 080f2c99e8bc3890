//! # Waiting State
//!
//! Tracks operations that are in flight, keyed by [`WaitingKey`]. Each key
//! holds a counter: work that starts increments it, work that finishes
//! decrements it, and the key counts as waiting while the counter is above
//! zero. The last error reported on decrement is kept for display.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::fs::FsPath;

/// Lookup key for an in-flight operation
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaitingKey(String);

impl WaitingKey {
    /// Create a key from its string form
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WaitingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Waiting key for deleting `path`.
///
/// One key per path; the same path always yields the same key.
pub fn delete_folder_waiting_key(path: &FsPath) -> WaitingKey {
    WaitingKey(format!("fs:delete:{path}"))
}

/// Per-key in-flight counters and last errors
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitingState {
    counts: BTreeMap<WaitingKey, u32>,
    errors: BTreeMap<WaitingKey, String>,
}

impl WaitingState {
    /// Create an empty waiting state
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one more operation in flight for `key`.
    ///
    /// Starting new work clears any error left by the previous attempt.
    pub fn increment(&mut self, key: &WaitingKey) {
        *self.counts.entry(key.clone()).or_insert(0) += 1;
        self.errors.remove(key);
    }

    /// Mark one operation for `key` as finished, optionally with an error.
    pub fn decrement(&mut self, key: &WaitingKey, error: Option<String>) {
        match self.counts.get_mut(key) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.counts.remove(key);
            }
            None => {
                tracing::warn!(key = %key, "Waiting counter decremented below zero");
            }
        }
        if let Some(error) = error {
            self.errors.insert(key.clone(), error);
        }
    }

    /// Forget everything about `key`
    pub fn clear(&mut self, key: &WaitingKey) {
        self.counts.remove(key);
        self.errors.remove(key);
    }

    /// Number of operations in flight for `key`
    pub fn count(&self, key: &WaitingKey) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Check if any operation is in flight for `key`
    pub fn is_waiting(&self, key: &WaitingKey) -> bool {
        self.count(key) > 0
    }

    /// Last error reported for `key`
    pub fn error(&self, key: &WaitingKey) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }
}

/// Check if any of `keys` has an operation in flight
pub fn any_waiting<'a, I>(state: &WaitingState, keys: I) -> bool
where
    I: IntoIterator<Item = &'a WaitingKey>,
{
    keys.into_iter().any(|key| state.is_waiting(key))
}
