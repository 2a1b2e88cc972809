//! # Data Model
//!
//! Core types shared by the command layer and the store.
//!
//! A [`Blueprint`] is a piece of user-uploaded content. Its metadata is what the
//! edit-properties form changes:
//!
//! - `title`, `description`: free text
//! - `exposure`: who can see it (see [`Exposure`])
//! - `expiration`: optional instant after which it is hidden
//! - `tags`: comma-joined tag ids (see [`crate::tags`]), `None` when untagged
//! - `video` / `video_provider`: embed URL and provider, always set together
//!
//! Timestamps are always UTC.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::video::{VideoEmbed, VideoProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exposure {
    Public,
    Unlisted,
    Private,
}

impl Exposure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exposure::Public => "public",
            Exposure::Unlisted => "unlisted",
            Exposure::Private => "private",
        }
    }
}

impl fmt::Display for Exposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exposure {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Exposure::Public),
            "unlisted" => Ok(Exposure::Unlisted),
            "private" => Ok(Exposure::Private),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub id: u64,
    /// Public identifier used in URLs (`/blueprint/<file_id>/`).
    pub file_id: String,
    pub author_id: u64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub exposure: Exposure,
    #[serde(default)]
    pub expiration: Option<DateTime<Utc>>,
    /// Comma-joined tag ids, in display order.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default)]
    pub video_provider: Option<VideoProvider>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Blueprint {
    pub fn new(
        id: u64,
        file_id: impl Into<String>,
        author_id: u64,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id,
            file_id: file_id.into(),
            author_id,
            title: title.into(),
            description: None,
            exposure: Exposure::Public,
            expiration: None,
            tags: None,
            video: None,
            video_provider: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    pub fn url(&self) -> String {
        format!("/blueprint/{}/", self.file_id)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiration.is_some_and(|at| at <= now)
    }

    /// Set or clear the video pair in one step.
    pub fn set_video(&mut self, video: Option<VideoEmbed>) {
        match video {
            Some(embed) => {
                self.video = Some(embed.embed_url);
                self.video_provider = Some(embed.provider);
            }
            None => {
                self.video = None;
                self.video_provider = None;
            }
        }
    }

    /// The stored tag ids, skipping anything unparsable.
    pub fn tag_ids(&self) -> Vec<u64> {
        self.tags
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .filter_map(|part| part.trim().parse::<u64>().ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}
