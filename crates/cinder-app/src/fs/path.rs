//! File-system path identifiers
//!
//! `FsPath` is an opaque, normalized, absolute path into the mounted file
//! system (e.g. `/keybase/private/alice/doc.txt`). The UI layer never
//! mutates a path; it only compares, displays and derives keys from it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Name of the mount root for the shared file system
pub const MOUNT_ROOT: &str = "keybase";

/// Top-level folder visibility under the mount root
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// `/keybase/private/...`
    Private,
    /// `/keybase/public/...`
    Public,
    /// `/keybase/team/...`
    Team,
}

impl Visibility {
    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "private" => Some(Self::Private),
            "public" => Some(Self::Public),
            "team" => Some(Self::Team),
            _ => None,
        }
    }
}

/// Normalized absolute path
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FsPath(String);

impl FsPath {
    /// Root path `/`
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Parse and normalize a path string.
    ///
    /// Accepts a single trailing slash. Rejects relative paths, empty
    /// segments and `.`/`..` segments.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if raw.is_empty() {
            return Err(AppError::invalid_path(raw, "path is empty"));
        }
        if !raw.starts_with('/') {
            return Err(AppError::invalid_path(raw, "path must be absolute"));
        }
        if raw == "/" {
            return Ok(Self::root());
        }

        let trimmed = raw.strip_suffix('/').unwrap_or(raw);
        for segment in trimmed[1..].split('/') {
            match segment {
                "" => return Err(AppError::invalid_path(raw, "path has an empty segment")),
                "." | ".." => {
                    return Err(AppError::invalid_path(raw, "path must not contain . or .."))
                }
                _ => {}
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    /// The path as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the root path
    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Path segments after the root, in order
    pub fn elements(&self) -> Vec<&str> {
        if self.is_root() {
            Vec::new()
        } else {
            self.0[1..].split('/').collect()
        }
    }

    /// Last segment, or `None` for the root
    pub fn name(&self) -> Option<&str> {
        if self.is_root() {
            None
        } else {
            self.0.rsplit('/').next()
        }
    }

    /// Parent directory, or `None` for the root
    pub fn parent(&self) -> Option<FsPath> {
        if self.is_root() {
            return None;
        }
        match self.0.rfind('/') {
            Some(0) => Some(Self::root()),
            Some(idx) => Some(Self(self.0[..idx].to_string())),
            None => None,
        }
    }

    /// Append a single segment
    pub fn join(&self, segment: &str) -> Result<FsPath, AppError> {
        if self.is_root() {
            Self::parse(&format!("/{segment}"))
        } else {
            Self::parse(&format!("{}/{segment}", self.0))
        }
    }

    /// Folder visibility for paths under the mount root
    pub fn visibility(&self) -> Option<Visibility> {
        let elements = self.elements();
        match elements.as_slice() {
            [root, tlf, ..] if *root == MOUNT_ROOT => Visibility::from_segment(tlf),
            _ => None,
        }
    }
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FsPath {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FsPath {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FsPath> for String {
    fn from(path: FsPath) -> Self {
        path.0
    }
}

impl AsRef<str> for FsPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> FsPath {
        FsPath::parse(s).expect("valid path")
    }

    #[test]
    fn test_parse_normalizes_trailing_slash() {
        assert_eq!(path("/keybase/private/").as_str(), "/keybase/private");
        assert_eq!(path("/").as_str(), "/");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(FsPath::parse("").is_err());
        assert!(FsPath::parse("keybase/private").is_err());
        assert!(FsPath::parse("/keybase//private").is_err());
        assert!(FsPath::parse("/keybase/../etc").is_err());
        assert!(FsPath::parse("/keybase/./private").is_err());
    }

    #[test]
    fn test_elements_name_parent() {
        let p = path("/keybase/private/alice/doc.txt");
        assert_eq!(p.elements(), vec!["keybase", "private", "alice", "doc.txt"]);
        assert_eq!(p.name(), Some("doc.txt"));
        assert_eq!(p.parent(), Some(path("/keybase/private/alice")));

        let top = path("/keybase");
        assert_eq!(top.parent(), Some(FsPath::root()));
        assert_eq!(FsPath::root().parent(), None);
        assert_eq!(FsPath::root().name(), None);
        assert!(FsPath::root().elements().is_empty());
    }

    #[test]
    fn test_join() {
        assert_eq!(FsPath::root().join("keybase").expect("join"), path("/keybase"));
        assert_eq!(
            path("/keybase/team").join("acme").expect("join"),
            path("/keybase/team/acme")
        );
        assert!(path("/keybase").join("..").is_err());
    }

    #[test]
    fn test_visibility() {
        assert_eq!(
            path("/keybase/private/alice").visibility(),
            Some(Visibility::Private)
        );
        assert_eq!(path("/keybase/public").visibility(), Some(Visibility::Public));
        assert_eq!(path("/keybase/team/acme/x").visibility(), Some(Visibility::Team));
        assert_eq!(path("/keybase").visibility(), None);
        assert_eq!(path("/home/alice").visibility(), None);
    }

    #[test]
    fn test_serde_uses_string_form() {
        let p = path("/keybase/public/bob");
        let json = serde_json::to_string(&p).expect("serialize");
        assert_eq!(json, "\"/keybase/public/bob\"");
        let back: FsPath = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, p);
        assert!(serde_json::from_str::<FsPath>("\"relative\"").is_err());
    }
}
