//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for request handlers and the CLI.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Owns** the store and the loaded [`BlueprintConfig`]
//! - **Dispatches** to the command functions
//! - **Decodes inputs** (raw form bytes into [`EditPropertiesForm`])
//! - **Supplies the clock** so commands stay deterministic under test
//!
//! It does no business logic of its own.
//!
//! ## Generic Over DataStore
//!
//! `BlueprintApi<S: DataStore>` works with any store; tests and the CLI use
//! [`crate::store::memory::InMemoryStore`].

use chrono::{DateTime, Utc};

use crate::commands::{self, profile::ProfileListing, properties::PropertiesResult, CmdResult};
use crate::config::BlueprintConfig;
use crate::error::Result;
use crate::form::{EditPropertiesForm, RawPropertiesForm};
use crate::store::DataStore;
use crate::tags::Tag;

pub struct BlueprintApi<S: DataStore> {
    store: S,
    config: BlueprintConfig,
    clock: fn() -> DateTime<Utc>,
}

impl<S: DataStore> BlueprintApi<S> {
    pub fn new(store: S, config: BlueprintConfig) -> Self {
        Self {
            store,
            config,
            clock: Utc::now,
        }
    }

    /// Replace the clock used for timestamps and relative times.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn edit_properties(
        &mut self,
        actor_id: u64,
        blueprint_id: u64,
        form: &EditPropertiesForm,
    ) -> Result<PropertiesResult> {
        let now = (self.clock)();
        commands::properties::run(&mut self.store, &self.config, actor_id, blueprint_id, form, now)
    }

    /// [`Self::edit_properties`] for a form still in raw bytes.
    pub fn edit_properties_raw(
        &mut self,
        actor_id: u64,
        blueprint_id: u64,
        raw: RawPropertiesForm,
    ) -> Result<PropertiesResult> {
        let form = EditPropertiesForm::decode(raw)?;
        self.edit_properties(actor_id, blueprint_id, &form)
    }

    pub fn delete_blueprint(&mut self, actor_id: u64, blueprint_id: u64) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, actor_id, blueprint_id)
    }

    pub fn profile(
        &self,
        username: &str,
        viewer_id: Option<u64>,
        page: Option<&str>,
    ) -> Result<ProfileListing> {
        let now = (self.clock)();
        commands::profile::run(&self.store, &self.config, username, viewer_id, page, now)
    }

    pub fn blueprint_tags(&self, blueprint_id: u64) -> Result<Vec<Tag>> {
        commands::tags::for_blueprint(&self.store, blueprint_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlueprintError;
    use crate::model::Exposure;
    use crate::store::memory::fixtures::{StoreFixture, AUTHOR_ID, AUTHOR_NAME};
    use crate::store::memory::InMemoryStore;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()
    }

    fn api() -> BlueprintApi<InMemoryStore> {
        let store = StoreFixture::new()
            .with_blueprint(AUTHOR_ID, Exposure::Public, fixed_now() - chrono::Duration::days(2))
            .store;
        BlueprintApi::new(store, BlueprintConfig::default()).with_clock(fixed_now)
    }

    #[test]
    fn test_edit_properties_uses_clock() {
        let mut api = api();
        let form = EditPropertiesForm {
            title: "T".to_string(),
            exposure: "public".to_string(),
            ..Default::default()
        };
        let result = api.edit_properties(AUTHOR_ID, 1, &form).unwrap();
        assert_eq!(result.blueprint.updated_at, Some(fixed_now()));
    }

    #[test]
    fn test_edit_properties_raw_rejects_bad_encoding() {
        let mut api = api();
        let raw = RawPropertiesForm {
            title: vec![0xFF, 0xFE],
            exposure: b"public".to_vec(),
            ..Default::default()
        };
        assert!(matches!(
            api.edit_properties_raw(AUTHOR_ID, 1, raw),
            Err(BlueprintError::InvalidEncoding)
        ));
        assert_eq!(api.store().get_blueprint(1).unwrap().title, "Blueprint 1");
    }

    #[test]
    fn test_profile_dispatch() {
        let api = api();
        let listing = api.profile(AUTHOR_NAME, None, None).unwrap();
        assert_eq!(listing.rows.len(), 1);
        assert_eq!(listing.rows[0].since, "2 days ago");
    }

    #[test]
    fn test_delete_dispatch() {
        let mut api = api();
        api.delete_blueprint(AUTHOR_ID, 1).unwrap();
        assert!(api.store().get_blueprint(1).is_err());
    }
}
