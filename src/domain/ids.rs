//! Document identifier newtype
//!
//! An identifier names one remote playlist file and is also the only place its
//! expiry date is recorded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Playlist document identifier
///
/// # Examples
///
/// ```
/// use playlist_sync::domain::ids::Identifier;
/// use std::str::FromStr;
///
/// let id = Identifier::from_str("DC21NOVEMBER2025").unwrap();
/// assert_eq!(id.as_str(), "DC21NOVEMBER2025");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identifier(String);

impl Identifier {
    /// Creates a new Identifier from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(Identifier)` if the ID is non-empty and usable as a file path,
    /// `Err` otherwise
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Identifier cannot be empty".to_string());
        }
        if id.starts_with('/') || id.contains("..") {
            return Err(format!("Identifier must be a relative path: {id}"));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Identifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
