//! Profile page listing.
//!
//! Lists a user's blueprints newest first, one page at a time:
//!
//! - the owner sees every exposure; everyone else sees `public` only
//! - expired blueprints are hidden from everyone
//! - ties on `created_at` are broken by descending id
//! - a page outside the listing fails with `PageOutOfRange`, so the handler can
//!   redirect to the profile's first page

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::config::BlueprintConfig;
use crate::error::{BlueprintError, Result};
use crate::model::{Blueprint, Exposure, User};
use crate::pagination::{parse_page_param, Page};
use crate::since::format_since;
use crate::store::DataStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRow {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub exposure: Exposure,
    pub created_at: DateTime<Utc>,
    /// Relative creation time, e.g. `3 days ago`.
    pub since: String,
}

impl ProfileRow {
    fn from_blueprint(bp: &Blueprint, now: DateTime<Utc>) -> Self {
        Self {
            id: bp.id,
            title: bp.title.clone(),
            url: bp.url(),
            exposure: bp.exposure,
            created_at: bp.created_at,
            since: format_since(bp.created_at, now),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileListing {
    pub user: User,
    pub is_owner: bool,
    pub rows: Vec<ProfileRow>,
    pub page: Page,
}

pub fn run<S: DataStore>(
    store: &S,
    config: &BlueprintConfig,
    username: &str,
    viewer_id: Option<u64>,
    page_param: Option<&str>,
    now: DateTime<Utc>,
) -> Result<ProfileListing> {
    let user = store.find_user_by_username(username)?;
    let requested = parse_page_param(page_param)?;
    let is_owner = viewer_id == Some(user.id);

    let mut visible: Vec<Blueprint> = store
        .list_blueprints_by_author(user.id)?
        .into_iter()
        .filter(|bp| !bp.is_expired(now))
        .filter(|bp| is_owner || bp.exposure == Exposure::Public)
        .collect();
    visible.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });

    let page = Page::new(visible.len() as u64, config.page_size, requested);
    if page.out_of_range {
        return Err(BlueprintError::PageOutOfRange {
            requested,
            page_count: page.page_count,
        });
    }

    let rows = page
        .slice(&visible)
        .iter()
        .map(|bp| ProfileRow::from_blueprint(bp, now))
        .collect();

    debug!(
        username,
        is_owner,
        total = visible.len(),
        page = page.current_page,
        "profile listed"
    );

    Ok(ProfileListing {
        user,
        is_owner,
        rows,
        page,
    })
}
