//! Event category identifiers.

use serde::{Deserialize, Serialize};

/// Opaque identifier for an event category.
///
/// Collectors report categories as numeric codes (`4624`) or symbolic names
/// (`service-start`); retenza treats both as plain strings. Comparison is
/// exact equality over the whole identifier, never substring or pattern
/// matching, so `"10"` does not count events in category `"100"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Creates a category identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u32> for CategoryId {
    fn from(code: u32) -> Self {
        Self(code.to_string())
    }
}

impl std::str::FromStr for CategoryId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_equality_only() {
        let short = CategoryId::from("10");
        let long = CategoryId::from("100");
        assert_ne!(short, long);
        assert_eq!(short, CategoryId::from(10u32));
    }

    #[test]
    fn test_display_roundtrip() {
        let id: CategoryId = "service-start".parse().unwrap();
        assert_eq!(id.to_string(), "service-start");
        assert_eq!(id.as_str(), "service-start");
    }

    #[test]
    fn test_serde_transparent() {
        let id = CategoryId::from(4624u32);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"4624\"");
        let back: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
