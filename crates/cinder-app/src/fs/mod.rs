//! # File System Types
//!
//! Identifiers for locations in the mounted file system. Traversal and
//! mutation belong to the file-system service; this module only names things.

mod path;

pub use path::{FsPath, Visibility, MOUNT_ROOT};
