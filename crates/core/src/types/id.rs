//! Product identifier newtype.
//!
//! The catalog API keys every product by an opaque string. Wrapping it
//! prevents product IDs from being mixed up with other string data
//! (image URLs, storage keys) at compile time.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque product identifier from the catalog API.
///
/// The catalog treats IDs as case-sensitive opaque strings; no format
/// is assumed beyond non-emptiness, which callers check via
/// [`ProductId::is_empty`] before trusting external input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product ID from a string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns true for an ID with no content (blank input from a form
    /// or a missing field in an API payload).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        let id = ProductId::new("laptop-17");
        assert_eq!(id.to_string(), "laptop-17");
        assert_eq!(id.as_str(), "laptop-17");
    }

    #[test]
    fn test_product_id_is_empty() {
        assert!(ProductId::new("").is_empty());
        assert!(ProductId::new("   ").is_empty());
        assert!(!ProductId::new("p1").is_empty());
    }

    #[test]
    fn test_product_id_serde_transparent() {
        let id = ProductId::new("p-42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p-42\"");
    }
}
