//! Edit a blueprint's properties.
//!
//! Order of checks: the blueprint must exist, the actor must be its author,
//! then the form is validated. Only a fully valid form touches the store.
//! On success the tag association is replaced by the normalized list (tags
//! left out of the textarea drop off the blueprint but stay in the
//! dictionary) and only tags new to the dictionary are inserted.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::commands::{load_authored, CmdMessage};
use crate::config::BlueprintConfig;
use crate::error::{BlueprintError, Result};
use crate::form::EditPropertiesForm;
use crate::model::Blueprint;
use crate::store::DataStore;
use crate::tags::{normalize_tags, Tag};

#[derive(Debug)]
pub struct PropertiesResult {
    pub blueprint: Blueprint,
    /// Tags now attached to the blueprint, in order.
    pub tags: Vec<Tag>,
    pub messages: Vec<CmdMessage>,
}

pub fn run<S: DataStore>(
    store: &mut S,
    config: &BlueprintConfig,
    actor_id: u64,
    blueprint_id: u64,
    form: &EditPropertiesForm,
    now: DateTime<Utc>,
) -> Result<PropertiesResult> {
    let mut blueprint = load_authored(store, actor_id, blueprint_id)?;

    let dictionary = store.load_tags()?;
    let normalized = normalize_tags(&form.tags, &dictionary, config.max_tags);

    let props = form.validate().map_err(|errors| {
        debug!(blueprint_id, %errors, "properties form rejected");
        BlueprintError::Validation {
            errors,
            tags: normalized.textarea(),
        }
    })?;

    if !normalized.created.is_empty() {
        store.add_tags(&normalized.created)?;
    }

    blueprint.title = props.title;
    blueprint.description = props.description;
    blueprint.exposure = props.exposure;
    blueprint.expiration = props.expiration.apply(blueprint.expiration, now);
    blueprint.tags = normalized.stored_ids();
    blueprint.set_video(props.video);
    blueprint.updated_at = Some(now);
    store.save_blueprint(&blueprint)?;

    info!(
        blueprint_id,
        tags = normalized.tags.len(),
        new_tags = normalized.created.len(),
        "blueprint properties updated"
    );

    let mut messages = vec![CmdMessage::success("Properties has been updated")];
    if !normalized.created.is_empty() {
        let count = normalized.created.len();
        messages.push(CmdMessage::info(format!(
            "{} new tag{} created",
            count,
            if count == 1 { "" } else { "s" }
        )));
    }

    Ok(PropertiesResult {
        blueprint,
        tags: normalized.tags,
        messages,
    })
}
