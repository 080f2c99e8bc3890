//! # Routes
//!
//! Navigation stack and the read-only parameter bags attached to each entry.
//! Leaf screens learn what to act on exclusively through [`RouteProps`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::AppError;
use crate::fs::FsPath;

/// Route identifiers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteName {
    /// File browser (root of the stack)
    #[default]
    Files,
    /// Delete confirmation for a path
    ReallyDelete,
    /// Conversation failed to load
    ConversationError,
}

impl RouteName {
    /// Get the display name for the route
    pub fn name(&self) -> &'static str {
        match self {
            RouteName::Files => "Files",
            RouteName::ReallyDelete => "Really Delete",
            RouteName::ConversationError => "Conversation Error",
        }
    }
}

/// Read-only parameters attached to a route entry
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteProps(BTreeMap<String, String>);

impl RouteProps {
    /// Create an empty parameter bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a parameter
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Look up a parameter
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Look up a parameter the screen cannot work without
    pub fn require(&self, name: &str) -> Result<&str, AppError> {
        self.get(name).ok_or_else(|| AppError::missing_param(name))
    }

    /// Look up a required parameter and parse it as a path
    pub fn path(&self, name: &str) -> Result<FsPath, AppError> {
        FsPath::parse(self.require(name)?)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One entry on the navigation stack
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Which screen this entry shows
    pub name: RouteName,
    /// Parameters for that screen
    pub props: RouteProps,
}

impl RouteEntry {
    /// Create an entry
    pub fn new(name: RouteName, props: RouteProps) -> Self {
        Self { name, props }
    }

    /// Delete confirmation entry for `path`
    pub fn really_delete(path: &FsPath) -> Self {
        Self::new(
            RouteName::ReallyDelete,
            RouteProps::new().with("path", path.as_str()),
        )
    }

    /// Conversation error entry showing `text`
    pub fn conversation_error(text: impl Into<String>) -> Self {
        Self::new(
            RouteName::ConversationError,
            RouteProps::new().with("conversation_error_text", text),
        )
    }
}

impl Default for RouteEntry {
    fn default() -> Self {
        Self::new(RouteName::Files, RouteProps::new())
    }
}

/// Navigation stack.
///
/// Never empty: the bottom entry stays put and `navigate_up` at the root is
/// a no-op.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteStack {
    root: RouteEntry,
    stack: Vec<RouteEntry>,
}

impl Default for RouteStack {
    fn default() -> Self {
        Self::new(RouteEntry::default())
    }
}

impl RouteStack {
    /// Create a stack with `root` at the bottom
    pub fn new(root: RouteEntry) -> Self {
        Self {
            root,
            stack: Vec::new(),
        }
    }

    /// Get the current (top) entry
    pub fn current(&self) -> &RouteEntry {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Number of entries including the root
    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    /// Check if only the root entry is left
    pub fn at_root(&self) -> bool {
        self.stack.is_empty()
    }

    /// Push a new entry
    pub fn navigate_append(&mut self, entry: RouteEntry) {
        self.stack.push(entry);
    }

    /// Pop the current entry. Returns whether anything was popped.
    pub fn navigate_up(&mut self) -> bool {
        self.stack.pop().is_some()
    }
}
