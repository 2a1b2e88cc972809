//! Tag textarea normalization.
//!
//! Turns the free-text tags field (one tag per line) into an ordered list of
//! [`Tag`]s:
//!
//! 1. Collapse whitespace runs and trim each line
//! 2. Drop empty lines and lines with forbidden characters
//! 3. Lowercase, then keep the first occurrence of each name
//! 4. Keep at most `max_tags` names, in input order
//! 5. Reuse dictionary ids for known names, assign `max_id + 1..` to new ones
//!
//! Bad lines are dropped, never reported as errors.

use std::collections::HashSet;

use tracing::trace;

use super::validation::validate_tag_line;
use super::{join_tag_ids, Tag, TagDictionary};

/// Result of normalizing a tags textarea.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTags {
    /// Surviving tags in final order.
    pub tags: Vec<Tag>,
    /// Tags from `tags` that are not yet in the dictionary.
    pub created: Vec<Tag>,
}

impl NormalizedTags {
    /// Comma-joined ids for the blueprint row; `None` when there are no tags.
    pub fn stored_ids(&self) -> Option<String> {
        join_tag_ids(&self.tags)
    }

    /// One name per line, for redisplaying the form.
    pub fn textarea(&self) -> String {
        self.tags
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize `raw` against `dictionary`, keeping at most `max_tags` tags.
pub fn normalize_tags(raw: &str, dictionary: &TagDictionary, max_tags: usize) -> NormalizedTags {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for line in raw.lines() {
        if names.len() >= max_tags {
            break;
        }

        let collapsed = collapse_whitespace(line);
        if let Err(reason) = validate_tag_line(&collapsed) {
            if !collapsed.is_empty() {
                trace!(line = %collapsed, %reason, "dropping tag line");
            }
            continue;
        }

        let name = collapsed.to_ascii_lowercase();
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }

    let mut next_id = dictionary.max_id();
    let mut result = NormalizedTags::default();
    for name in names {
        match dictionary.find_by_name(&name) {
            Some(existing) => result.tags.push(existing.clone()),
            None => {
                next_id += 1;
                let tag = Tag::new(next_id, name);
                result.created.push(tag.clone());
                result.tags.push(tag);
            }
        }
    }

    result
}
