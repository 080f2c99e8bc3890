//! Property test strategies for Cinder types
//!
//! # Example
//!
//! ```rust
//! use cinder_testkit::strategies::arb_fs_path;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn path_round_trips(path in arb_fs_path()) {
//!         prop_assert_eq!(path.to_string().parse::<cinder_app::FsPath>().unwrap(), path);
//!     }
//! }
//! ```

use cinder_app::FsPath;
use proptest::prelude::*;

// Re-export proptest for convenience
pub use proptest;

/// Strategy for a single path segment (never `.` or `..`)
pub fn arb_segment() -> impl Strategy<Value = String> {
    "[a-z0-9][a-z0-9._-]{0,11}"
}

/// Strategy for paths under the mount root, e.g. `/keybase/team/acme/x`
pub fn arb_fs_path() -> impl Strategy<Value = FsPath> {
    (
        prop_oneof![Just("private"), Just("public"), Just("team")],
        prop::collection::vec(arb_segment(), 1..5),
    )
        .prop_map(|(tlf, segments)| {
            // Panics on a strategy bug instead of shrinking toward a valid path
            crate::fixtures::path(&format!("/keybase/{tlf}/{}", segments.join("/")))
        })
}

/// Strategy for a target path plus other paths that may be waiting
pub fn arb_path_with_neighbors() -> impl Strategy<Value = (FsPath, Vec<FsPath>)> {
    (arb_fs_path(), prop::collection::vec(arb_fs_path(), 0..4))
}
