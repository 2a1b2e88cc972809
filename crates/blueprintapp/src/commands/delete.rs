use tracing::info;

use crate::commands::{load_authored, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Delete a blueprint. Only its author may do so; the tag dictionary is left as is.
pub fn run<S: DataStore>(store: &mut S, actor_id: u64, blueprint_id: u64) -> Result<CmdResult> {
    let blueprint = load_authored(store, actor_id, blueprint_id)?;
    store.delete_blueprint(blueprint.id)?;
    info!(blueprint_id, "blueprint deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Blueprint '{}' has been deleted",
        blueprint.title
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlueprintError;
    use crate::model::Exposure;
    use crate::store::memory::fixtures::{StoreFixture, AUTHOR_ID, OTHER_ID};
    use chrono::Utc;

    #[test]
    fn test_author_deletes() {
        let mut store = StoreFixture::new()
            .with_tags(&["tag 1"])
            .with_blueprint(AUTHOR_ID, Exposure::Public, Utc::now())
            .store;

        let result = run(&mut store, AUTHOR_ID, 1).unwrap();
        assert_eq!(
            result.messages[0].content,
            "Blueprint 'Blueprint 1' has been deleted"
        );
        assert!(matches!(
            store.get_blueprint(1),
            Err(BlueprintError::BlueprintNotFound(1))
        ));
        assert_eq!(store.load_tags().unwrap().len(), 1);
    }

    #[test]
    fn test_non_author_forbidden() {
        let mut store = StoreFixture::new()
            .with_blueprint(AUTHOR_ID, Exposure::Public, Utc::now())
            .store;

        let result = run(&mut store, OTHER_ID, 1);
        assert!(matches!(result, Err(BlueprintError::Forbidden)));
        assert!(store.get_blueprint(1).is_ok());
    }

    #[test]
    fn test_missing_blueprint() {
        let mut store = StoreFixture::new().store;
        assert!(matches!(
            run(&mut store, AUTHOR_ID, 5),
            Err(BlueprintError::BlueprintNotFound(5))
        ));
    }
}
