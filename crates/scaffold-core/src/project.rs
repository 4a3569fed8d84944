//! Project name validation

use crate::error::ScaffoldError;
use std::fmt;

/// A validated project name
///
/// The name doubles as the root directory of the generated tree and as the
/// package name written into the generated manifest, so it must be a single
/// filesystem path segment. Surrounding whitespace is trimmed; anything that
/// would escape the target directory or produce an unusable directory name is
/// rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(raw: &str) -> Result<Self, ScaffoldError> {
        let name = raw.trim();

        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name.contains('/') || name.contains('\\') {
            Some("name must not contain path separators")
        } else if name == "." || name == ".." {
            Some("name must not be a relative path component")
        } else if name.chars().any(char::is_control) {
            Some("name must not contain control characters")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ScaffoldError::InvalidName {
                name: raw.to_string(),
                reason,
            }),
            None => Ok(Self(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
