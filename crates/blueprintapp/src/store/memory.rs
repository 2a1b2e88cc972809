use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};

use super::DataStore;
use crate::error::{BlueprintError, Result};
use crate::model::{Blueprint, User};
use crate::tags::{Tag, TagDictionary};

/// JSON layout accepted by [`InMemoryStore::from_reader`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub blueprints: Vec<Blueprint>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

#[derive(Debug, Default)]
pub struct InMemoryStore {
    users: BTreeMap<u64, User>,
    blueprints: BTreeMap<u64, Blueprint>,
    tags: TagDictionary,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self> {
        let mut store = Self::new();
        for user in snapshot.users {
            store.add_user(user);
        }
        for blueprint in snapshot.blueprints {
            store.save_blueprint(&blueprint)?;
        }
        store.add_tags(&snapshot.tags)?;
        Ok(store)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let snapshot: StoreSnapshot = serde_json::from_reader(reader)?;
        Self::from_snapshot(snapshot)
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            users: self.users.values().cloned().collect(),
            blueprints: self.blueprints.values().cloned().collect(),
            tags: self.tags.iter().cloned().collect(),
        }
    }

    pub fn add_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }
}

impl DataStore for InMemoryStore {
    fn get_blueprint(&self, id: u64) -> Result<Blueprint> {
        self.blueprints
            .get(&id)
            .cloned()
            .ok_or(BlueprintError::BlueprintNotFound(id))
    }

    fn save_blueprint(&mut self, blueprint: &Blueprint) -> Result<()> {
        self.blueprints.insert(blueprint.id, blueprint.clone());
        Ok(())
    }

    fn delete_blueprint(&mut self, id: u64) -> Result<()> {
        self.blueprints
            .remove(&id)
            .map(|_| ())
            .ok_or(BlueprintError::BlueprintNotFound(id))
    }

    fn list_blueprints_by_author(&self, author_id: u64) -> Result<Vec<Blueprint>> {
        Ok(self
            .blueprints
            .values()
            .filter(|bp| bp.author_id == author_id)
            .cloned()
            .collect())
    }

    fn find_user_by_username(&self, username: &str) -> Result<User> {
        self.users
            .values()
            .find(|u| u.username == username)
            .cloned()
            .ok_or_else(|| BlueprintError::UserNotFound(username.to_string()))
    }

    fn load_tags(&self) -> Result<TagDictionary> {
        Ok(self.tags.clone())
    }

    fn add_tags(&mut self, tags: &[Tag]) -> Result<()> {
        if let Some(dup) = tags.iter().find(|t| self.tags.find_by_id(t.id).is_some()) {
            return Err(BlueprintError::Store(format!(
                "tag id {} is already in use",
                dup.id
            )));
        }
        self.tags.extend(tags.iter().cloned());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Exposure;
    use chrono::{DateTime, Duration, Utc};

    pub const AUTHOR_ID: u64 = 1;
    pub const AUTHOR_NAME: &str = "author";
    pub const OTHER_ID: u64 = 2;
    pub const OTHER_NAME: &str = "other";

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: u64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        /// A store with two users: `author` (id 1) and `other` (id 2).
        pub fn new() -> Self {
            let mut store = InMemoryStore::new();
            store.add_user(User {
                id: AUTHOR_ID,
                username: AUTHOR_NAME.to_string(),
            });
            store.add_user(User {
                id: OTHER_ID,
                username: OTHER_NAME.to_string(),
            });
            Self { store, next_id: 1 }
        }

        pub fn with_tags(mut self, names: &[&str]) -> Self {
            let start = self.store.tags.max_id();
            let tags: Vec<Tag> = names
                .iter()
                .zip(1..)
                .map(|(name, offset)| Tag::new(start + offset, *name))
                .collect();
            self.store.add_tags(&tags).unwrap();
            self
        }

        pub fn with_blueprint(
            mut self,
            author_id: u64,
            exposure: Exposure,
            created_at: DateTime<Utc>,
        ) -> Self {
            let id = self.next_id;
            self.next_id += 1;
            let mut bp = Blueprint::new(
                id,
                format!("file{}", id),
                author_id,
                format!("Blueprint {}", id),
            );
            bp.exposure = exposure;
            bp.created_at = created_at;
            self.store.save_blueprint(&bp).unwrap();
            self
        }

        /// `count` public blueprints by `author_id`, one hour apart, the last one newest.
        pub fn with_public_blueprints(
            mut self,
            count: usize,
            author_id: u64,
            now: DateTime<Utc>,
        ) -> Self {
            for i in 0..count {
                let age = Duration::hours((count - i) as i64);
                self = self.with_blueprint(author_id, Exposure::Public, now - age);
            }
            self
        }
    }
}
