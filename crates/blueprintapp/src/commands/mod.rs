//! # Command Layer
//!
//! The code that request handlers call. Each command lives in its own
//! submodule and works on plain Rust types against a [`DataStore`].
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Check that the acting user may perform the operation (author-only edits)
//! - Validate typed form input
//! - Run the pure utilities (tag normalization, video resolution, pagination,
//!   relative time)
//! - Persist changes through the store
//! - Return structured results with [`CmdMessage`]s
//!
//! ## What Commands Do NOT Do
//!
//! - **Sessions / CSRF**: the caller authenticates and passes an explicit actor id
//! - **Rendering**: results are data; HTML or terminal output is the caller's job
//! - **Redirects**: errors such as `PageOutOfRange` tell the caller what happened
//!
//! ## Testing Strategy
//!
//! Command tests use [`crate::store::memory::InMemoryStore`] fixtures and cover
//! every branch: authorization, validation failures, and the persisted state.
//!
//! ## Command Modules
//!
//! - [`properties`]: Edit title, description, exposure, expiration, tags, video
//! - [`delete`]: Delete a blueprint
//! - [`profile`]: Paginated listing of a user's blueprints
//! - [`tags`]: Resolve a blueprint's tags
//!
//! [`DataStore`]: crate::store::DataStore

use serde::Serialize;

use crate::error::{BlueprintError, Result};
use crate::model::Blueprint;
use crate::store::DataStore;

pub mod delete;
pub mod profile;
pub mod properties;
pub mod tags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }
}

/// Load a blueprint and check that `actor_id` wrote it.
pub(crate) fn load_authored<S: DataStore>(
    store: &S,
    actor_id: u64,
    blueprint_id: u64,
) -> Result<Blueprint> {
    let blueprint = store.get_blueprint(blueprint_id)?;
    if blueprint.author_id != actor_id {
        tracing::warn!(actor_id, blueprint_id, "refusing change by non-author");
        return Err(BlueprintError::Forbidden);
    }
    Ok(blueprint)
}
