//! Strongly-typed identifier value objects.
//!
//! Templates and tags are keyed by database-assigned integers, so unlike
//! random UUIDs these identifiers only come into existence on insert.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a reply template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(i64);

impl TemplateId {
    /// Wraps a raw database identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TemplateId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Unique identifier for a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(i64);

impl TagId {
    /// Wraps a raw database identifier.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_id_parses_from_path_segment() {
        let id: TemplateId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);
        assert!("abc".parse::<TemplateId>().is_err());
    }

    #[test]
    fn template_id_serializes_as_plain_integer() {
        let json = serde_json::to_string(&TemplateId::new(7)).unwrap();
        assert_eq!(json, "7");
    }

    #[test]
    fn tag_id_displays_inner_value() {
        assert_eq!(TagId::new(3).to_string(), "3");
    }
}
