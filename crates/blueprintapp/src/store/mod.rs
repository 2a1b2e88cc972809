//! # Storage Layer
//!
//! The [`DataStore`] trait is the seam between the command layer and whatever
//! persists blueprints, users and the tag dictionary. The application's real
//! database lives behind this trait and is not part of this crate.
//!
//! ## Contract
//!
//! - Lookups by id fail with [`BlueprintError::BlueprintNotFound`] or
//!   [`BlueprintError::UserNotFound`].
//! - [`DataStore::add_tags`] must keep tag ids unique; when several writers can
//!   allocate ids concurrently, the store enforces it (unique constraint or
//!   transaction), not the caller.
//! - Deleting a blueprint never touches the tag dictionary.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: for tests and the CLI, loadable from a JSON
//!   snapshot.
//!
//! [`BlueprintError::BlueprintNotFound`]: crate::error::BlueprintError::BlueprintNotFound
//! [`BlueprintError::UserNotFound`]: crate::error::BlueprintError::UserNotFound

use crate::error::Result;
use crate::model::{Blueprint, User};
use crate::tags::{Tag, TagDictionary};

pub mod memory;

pub trait DataStore {
    fn get_blueprint(&self, id: u64) -> Result<Blueprint>;
    fn save_blueprint(&mut self, blueprint: &Blueprint) -> Result<()>;
    fn delete_blueprint(&mut self, id: u64) -> Result<()>;

    /// Every blueprint written by `author_id`, in no particular order.
    fn list_blueprints_by_author(&self, author_id: u64) -> Result<Vec<Blueprint>>;

    fn find_user_by_username(&self, username: &str) -> Result<User>;

    fn load_tags(&self) -> Result<TagDictionary>;
    /// Insert tags that are new to the dictionary.
    fn add_tags(&mut self, tags: &[Tag]) -> Result<()>;
}
