//! Template aggregate and its write models.
//!
//! A template is a reusable block of reply text. Identifiers and timestamps
//! are assigned by the store, so new templates are described by a validated
//! [`NewTemplate`] and edits by [`TemplateChanges`]; the store turns those into
//! a persisted [`Template`].

use serde::{Deserialize, Serialize};

use super::tag::{Tag, TagName};
use crate::domain::foundation::{TemplateId, Timestamp, ValidationError};

/// Maximum length for a template title.
pub const MAX_TITLE_LENGTH: usize = 100;

/// Persisted reply template.
///
/// # Invariants
///
/// - `title` is 1-100 characters, non-blank
/// - `content` is non-blank
/// - `tags` holds no duplicate names and keeps insertion order
/// - `updated_at` is never before `created_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    id: TemplateId,
    title: String,
    content: String,
    tags: Vec<Tag>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Template {
    /// Reconstitute a template from persistence (no validation).
    pub fn reconstitute(
        id: TemplateId,
        title: String,
        content: String,
        tags: Vec<Tag>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            title,
            content,
            tags,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Tag names in association order.
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.name.to_string()).collect()
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.name.as_str() == name)
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Case-insensitive substring match against title or content.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        self.title.to_lowercase().contains(&needle) || self.content.to_lowercase().contains(&needle)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (used by in-process stores)
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies validated changes. `tags` carries the already-resolved tag set
    /// when the changes replace it.
    pub fn apply(&mut self, changes: TemplateChanges, tags: Option<Vec<Tag>>, at: Timestamp) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(content) = changes.content {
            self.content = content;
        }
        if let Some(tags) = tags {
            self.tags = tags;
        }
        self.updated_at = at;
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::empty_field("title"));
    }
    let len = title.chars().count();
    if len > MAX_TITLE_LENGTH {
        return Err(ValidationError::too_long("title", MAX_TITLE_LENGTH, len));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        return Err(ValidationError::empty_field("content"));
    }
    Ok(())
}

/// Validated input for creating a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTemplate {
    pub title: String,
    pub content: String,
    pub tag_names: Vec<TagName>,
}

impl NewTemplate {
    /// # Errors
    ///
    /// - `EmptyField` if title or content is blank
    /// - `TooLong` if the title or a tag name exceeds its limit
    pub fn new<I, S>(
        title: impl Into<String>,
        content: impl Into<String>,
        tag_names: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let title = title.into();
        let content = content.into();
        validate_title(&title)?;
        validate_content(&content)?;
        let tag_names = TagName::parse_all(tag_names)?;

        Ok(Self {
            title,
            content,
            tag_names,
        })
    }
}

/// Validated partial update. `None` leaves the field untouched; `Some` tags
/// replace the whole association set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tag_names: Option<Vec<TagName>>,
}

impl TemplateChanges {
    /// # Errors
    ///
    /// Same rules as [`NewTemplate::new`] for each provided field.
    pub fn new(
        title: Option<String>,
        content: Option<String>,
        tag_names: Option<Vec<String>>,
    ) -> Result<Self, ValidationError> {
        if let Some(ref title) = title {
            validate_title(title)?;
        }
        if let Some(ref content) = content {
            validate_content(content)?;
        }
        let tag_names = tag_names.map(TagName::parse_all).transpose()?;

        Ok(Self {
            title,
            content,
            tag_names,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tag_names.is_none()
    }
}

/// Listing filter for templates.
///
/// Empty strings are treated as absent, matching how query parameters arrive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    pub search: Option<String>,
    pub tag: Option<String>,
}

impl TemplateFilter {
    pub fn new(search: Option<String>, tag: Option<String>) -> Self {
        Self {
            search: search.filter(|s| !s.is_empty()),
            tag: tag.filter(|t| !t.is_empty()),
        }
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self::new(Some(term.into()), None)
    }

    pub fn tag(name: impl Into<String>) -> Self {
        Self::new(None, Some(name.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::TagId;

    fn sample() -> Template {
        let now = Timestamp::now();
        Template::reconstitute(
            TemplateId::new(1),
            "Shipping delay".to_string(),
            "Your Widget order is on its way.".to_string(),
            vec![Tag::new(TagId::new(1), TagName::new("shipping").unwrap())],
            now,
            now,
        )
    }

    #[test]
    fn new_template_requires_title_and_content() {
        assert!(matches!(
            NewTemplate::new("", "body", Vec::<String>::new()),
            Err(ValidationError::EmptyField { ref field }) if field == "title"
        ));
        assert!(matches!(
            NewTemplate::new("Title", "  ", Vec::<String>::new()),
            Err(ValidationError::EmptyField { ref field }) if field == "content"
        ));
    }

    #[test]
    fn new_template_rejects_long_title() {
        let title = "t".repeat(MAX_TITLE_LENGTH + 1);
        assert!(NewTemplate::new(title, "body", Vec::<String>::new()).is_err());
    }

    #[test]
    fn new_template_dedupes_tags() {
        let t = NewTemplate::new("Title", "Body", vec!["a", "b", "a"]).unwrap();
        assert_eq!(t.tag_names.len(), 2);
    }

    #[test]
    fn changes_validate_only_provided_fields() {
        assert!(TemplateChanges::new(None, None, None).unwrap().is_empty());
        assert!(TemplateChanges::new(Some(String::new()), None, None).is_err());
        assert!(TemplateChanges::new(None, Some("new".into()), None).is_ok());
        assert!(TemplateChanges::new(None, None, Some(vec![String::new()])).is_err());
    }

    #[test]
    fn changes_with_empty_tag_list_clears_tags() {
        let changes = TemplateChanges::new(None, None, Some(vec![])).unwrap();
        assert_eq!(changes.tag_names, Some(vec![]));
        assert!(!changes.is_empty());
    }

    #[test]
    fn matches_search_is_case_insensitive_over_title_and_content() {
        let t = sample();
        assert!(t.matches_search("widget"));
        assert!(t.matches_search("DELAY"));
        assert!(!t.matches_search("refund"));
    }

    #[test]
    fn has_tag_matches_exact_name() {
        let t = sample();
        assert!(t.has_tag("shipping"));
        assert!(!t.has_tag("Shipping"));
    }

    #[test]
    fn apply_overwrites_only_provided_fields() {
        let mut t = sample();
        let before = *t.updated_at();
        let changes = TemplateChanges::new(Some("New title".into()), None, None).unwrap();
        t.apply(changes, None, Timestamp::now());

        assert_eq!(t.title(), "New title");
        assert_eq!(t.content(), "Your Widget order is on its way.");
        assert_eq!(t.tag_names(), vec!["shipping".to_string()]);
        assert!(!t.updated_at().is_before(&before));
    }

    #[test]
    fn filter_treats_empty_strings_as_absent() {
        let f = TemplateFilter::new(Some(String::new()), Some(String::new()));
        assert_eq!(f, TemplateFilter::default());
    }
}
