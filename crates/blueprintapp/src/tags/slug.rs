//! Slug derivation for tag names.
//!
//! Only ASCII input is pinned down; anything outside `[a-z0-9._-]` after
//! lowercasing is removed.

/// Lowercases `name`, turns spaces into hyphens and keeps `[a-z0-9._-]`.
pub fn slugify(name: &str) -> String {
    name.chars()
        .map(|ch| if ch == ' ' { '-' } else { ch.to_ascii_lowercase() })
        .filter(|ch| {
            ch.is_ascii_lowercase() || ch.is_ascii_digit() || matches!(ch, '.' | '_' | '-')
        })
        .collect()
}
