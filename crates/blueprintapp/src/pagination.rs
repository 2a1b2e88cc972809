//! # Pagination
//!
//! Computes the window and navigation links for a paginated listing.
//!
//! - `page_count = ceil(total / page_size)`, never less than 1 so an empty
//!   listing still has page 1
//! - the requested page is clamped into `1..=page_count`; [`Page::out_of_range`]
//!   tells the caller a clamp happened (handlers redirect to page 1)
//! - "previous" exists iff the current page is above 1, "next" iff it is below
//!   `page_count`
//! - every page number is linked; there is no windowing
//!
//! The calculator never fails. Only [`parse_page_param`] rejects input, for
//! query strings that are not a positive integer.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::error::{BlueprintError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: u64,
    pub is_current: bool,
}

/// A page window. Building one is O(1); the per-page links are produced
/// lazily by [`Page::links`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub current_page: u64,
    pub page_count: u64,
    pub total_items: u64,
    pub offset: u64,
    pub limit: u64,
    pub previous_page: Option<u64>,
    pub next_page: Option<u64>,
    /// The requested page was outside `1..=page_count` and got clamped.
    pub out_of_range: bool,
}

impl Page {
    /// A `page_size` of zero is treated as 1.
    pub fn new(total_items: u64, page_size: u64, requested_page: u64) -> Self {
        let page_size = page_size.max(1);
        let page_count = total_items.div_ceil(page_size).max(1);
        let current_page = requested_page.clamp(1, page_count);

        Self {
            current_page,
            page_count,
            total_items,
            offset: (current_page - 1).saturating_mul(page_size),
            limit: page_size,
            previous_page: (current_page > 1).then(|| current_page - 1),
            next_page: (current_page < page_count).then(|| current_page + 1),
            out_of_range: current_page != requested_page,
        }
    }

    /// One link per page, `1..=page_count`, with the current page marked.
    pub fn links(&self) -> impl Iterator<Item = PageLink> {
        let current = self.current_page;
        (1..=self.page_count).map(move |number| PageLink {
            number,
            is_current: number == current,
        })
    }

    pub fn has_previous(&self) -> bool {
        self.previous_page.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// The items of this page out of the full, already sorted list.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset).unwrap_or(usize::MAX).min(items.len());
        let end = start
            .saturating_add(usize::try_from(self.limit).unwrap_or(usize::MAX))
            .min(items.len());
        &items[start..end]
    }
}

struct Links<'a>(&'a Page);

impl Serialize for Links<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.links())
    }
}

// Links are streamed into the serializer instead of being stored on the page.
impl Serialize for Page {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Page", 9)?;
        state.serialize_field("current_page", &self.current_page)?;
        state.serialize_field("page_count", &self.page_count)?;
        state.serialize_field("total_items", &self.total_items)?;
        state.serialize_field("offset", &self.offset)?;
        state.serialize_field("limit", &self.limit)?;
        state.serialize_field("previous_page", &self.previous_page)?;
        state.serialize_field("next_page", &self.next_page)?;
        state.serialize_field("links", &Links(self))?;
        state.serialize_field("out_of_range", &self.out_of_range)?;
        state.end()
    }
}

/// Parse the `page` query parameter. Absent means page 1.
pub fn parse_page_param(raw: Option<&str>) -> Result<u64> {
    let Some(raw) = raw else {
        return Ok(1);
    };
    match raw.trim().parse::<u64>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(BlueprintError::InvalidPage(raw.to_string())),
    }
}
