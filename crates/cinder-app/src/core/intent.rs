//! # Intents: User Actions
//!
//! An intent describes something the user asked for. Intents are
//! fire-and-forget: dispatching one never returns a result to the caller.
//!
//! ## Flow
//!
//! ```text
//! Callback → Intent → Store::dispatch → reduce → listeners
//! ```
//!
//! Route and waiting intents are reduced by the store itself. File-system
//! intents pass through unreduced and are handled by whichever listener owns
//! the file-system service.

use serde::{Deserialize, Serialize};

use crate::fs::FsPath;
use crate::route::RouteEntry;
use crate::waiting::WaitingKey;

/// File-system intents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FsIntent {
    /// Delete the file or folder at `path`
    DeleteFile {
        /// Target path
        path: FsPath,
    },
}

/// Navigation intents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteIntent {
    /// Pop the current route entry
    NavigateUp,
    /// Push a route entry
    NavigateAppend(RouteEntry),
}

/// In-flight operation bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaitingIntent {
    /// An operation started
    Increment {
        /// Key of the operation
        key: WaitingKey,
    },
    /// An operation finished
    Decrement {
        /// Key of the operation
        key: WaitingKey,
        /// Error message if it failed
        error: Option<String>,
    },
    /// Reset the key
    Clear {
        /// Key to reset
        key: WaitingKey,
    },
}

/// A user action dispatched to the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// File-system intents
    Fs(FsIntent),
    /// Navigation intents
    Route(RouteIntent),
    /// Waiting-state intents
    Waiting(WaitingIntent),
}

impl Intent {
    /// Delete the file or folder at `path`
    pub fn delete_file(path: FsPath) -> Self {
        Self::Fs(FsIntent::DeleteFile { path })
    }

    /// Navigate up one level
    pub fn navigate_up() -> Self {
        Self::Route(RouteIntent::NavigateUp)
    }

    /// Push a route entry
    pub fn navigate_append(entry: RouteEntry) -> Self {
        Self::Route(RouteIntent::NavigateAppend(entry))
    }

    /// Short label for logging
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fs(FsIntent::DeleteFile { .. }) => "fs.delete_file",
            Self::Route(RouteIntent::NavigateUp) => "route.navigate_up",
            Self::Route(RouteIntent::NavigateAppend(_)) => "route.navigate_append",
            Self::Waiting(WaitingIntent::Increment { .. }) => "waiting.increment",
            Self::Waiting(WaitingIntent::Decrement { .. }) => "waiting.decrement",
            Self::Waiting(WaitingIntent::Clear { .. }) => "waiting.clear",
        }
    }
}
