//! Tag support for blueprints.
//!
//! Tags categorize blueprints. They live in a global dictionary (id, name,
//! slug) and a blueprint references them through a comma-joined list of ids.
//!
//! ## Tag Dictionary
//!
//! The dictionary is append-only from the point of view of a blueprint edit:
//! new names get fresh ids, known names reuse theirs, and removing a tag from a
//! blueprint only changes that blueprint's association.
//!
//! ## Tag Rules
//!
//! See [`validation`] for what a tag line may contain, [`slug`] for slug
//! derivation and [`normalize`] for the full textarea pipeline.

pub mod normalize;
pub mod slug;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use normalize::{normalize_tags, NormalizedTags};
pub use slug::slugify;
pub use validation::{validate_tag_line, TagValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u64,
    /// Normalized display name (lowercase, single spaces).
    pub name: String,
    pub slug: String,
}

impl Tag {
    /// Build a tag from a normalized name, deriving its slug.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        let name = name.into();
        let slug = slugify(&name);
        Self { id, name, slug }
    }
}

/// The set of tags already known to the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagDictionary {
    tags: Vec<Tag>,
}

impl TagDictionary {
    pub fn new(tags: Vec<Tag>) -> Self {
        Self { tags }
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }

    pub fn find_by_id(&self, id: u64) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == id)
    }

    /// Highest id in use, `0` for an empty dictionary.
    pub fn max_id(&self) -> u64 {
        self.tags.iter().map(|t| t.id).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn extend(&mut self, tags: impl IntoIterator<Item = Tag>) {
        self.tags.extend(tags);
    }
}

/// Comma-joined ids for storage, `None` for an empty list.
pub fn join_tag_ids(tags: &[Tag]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(
        tags.iter()
            .map(|t| t.id.to_string())
            .collect::<Vec<_>>()
            .join(","),
    )
}
