//! Tag entity and tag name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{TagId, ValidationError};

/// Maximum length for a tag name.
pub const MAX_TAG_NAME_LENGTH: usize = 50;

/// Validated tag name.
///
/// Names are compared exactly (case-sensitive, no trimming), matching how
/// they are stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagName(String);

impl TagName {
    /// Validates and wraps a tag name.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `TooLong` if the name exceeds [`MAX_TAG_NAME_LENGTH`] characters
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("tags"));
        }
        let len = name.chars().count();
        if len > MAX_TAG_NAME_LENGTH {
            return Err(ValidationError::too_long("tags", MAX_TAG_NAME_LENGTH, len));
        }
        Ok(Self(name))
    }

    /// Validates a list of names, dropping repeats while keeping first-seen order.
    pub fn parse_all<I, S>(names: I) -> Result<Vec<TagName>, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed: Vec<TagName> = Vec::new();
        for name in names {
            let name = TagName::new(name)?;
            if !parsed.contains(&name) {
                parsed.push(name);
            }
        }
        Ok(parsed)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A named label shared between templates.
///
/// Tags are created implicitly when a template first references a new name
/// and are never removed when their last template goes away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub name: TagName,
}

impl Tag {
    pub fn new(id: TagId, name: TagName) -> Self {
        Self { id, name }
    }
}
