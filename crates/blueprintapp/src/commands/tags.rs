//! Tag lookups for a single blueprint.

use tracing::warn;

use crate::error::Result;
use crate::store::DataStore;
use crate::tags::Tag;

/// The blueprint's tags in stored order. Ids missing from the dictionary are skipped.
pub fn for_blueprint<S: DataStore>(store: &S, blueprint_id: u64) -> Result<Vec<Tag>> {
    let blueprint = store.get_blueprint(blueprint_id)?;
    let dictionary = store.load_tags()?;

    Ok(blueprint
        .tag_ids()
        .into_iter()
        .filter_map(|id| {
            let tag = dictionary.find_by_id(id).cloned();
            if tag.is_none() {
                warn!(blueprint_id, tag_id = id, "blueprint references unknown tag");
            }
            tag
        })
        .collect())
}
