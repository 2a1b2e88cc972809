//! # Configuration
//!
//! Blueprint configuration is loaded with [`confique`], layering environment
//! variables, TOML files and compiled defaults.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `BLUEPRINT_PAGE_SIZE`, `BLUEPRINT_MAX_TAGS`.
//! 2. **Explicit file**: the path handed to [`BlueprintConfig::load`] (the CLI's `--config`).
//! 3. **User file**: `blueprint.toml` in the OS config directory (via `directories`), if present.
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `page_size` | `5` | Blueprints per profile page |
//! | `max_tags` | `25` | Tags kept per blueprint after normalization |

use std::path::{Path, PathBuf};

use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{BlueprintError, Result};

pub const DEFAULT_PAGE_SIZE: u64 = 5;
pub const DEFAULT_MAX_TAGS: usize = 25;

const CONFIG_FILE_NAME: &str = "blueprint.toml";

/// Configuration for blueprint, stored in `blueprint.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlueprintConfig {
    /// Number of blueprints shown per profile page.
    #[config(default = 5, env = "BLUEPRINT_PAGE_SIZE")]
    pub page_size: u64,

    /// Maximum number of tags kept on a blueprint.
    #[config(default = 25, env = "BLUEPRINT_MAX_TAGS")]
    pub max_tags: usize,
}

impl Default for BlueprintConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_tags: DEFAULT_MAX_TAGS,
        }
    }
}

impl BlueprintConfig {
    /// Load configuration from the environment, `explicit` (if any) and the
    /// user config file (if it exists), falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let user = user_config_path();
        Self::load_layers(Self::builder().env(), explicit, user.as_deref())
    }

    /// File layers on top of `builder`; earlier layers win.
    fn load_layers(
        mut builder: confique::Builder<Self>,
        explicit: Option<&Path>,
        user: Option<&Path>,
    ) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(BlueprintError::InvalidConfig(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.file(path);
        }
        if let Some(path) = user {
            builder = builder.file(path);
        }
        let config = builder.load()?;
        config.validate()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(BlueprintError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.max_tags == 0 {
            return Err(BlueprintError::InvalidConfig(
                "max_tags must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// A commented TOML file listing every setting with its default.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}

/// Path of the per-user config file, when a home directory can be resolved.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "blueprint").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BlueprintConfig::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.max_tags, 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let config = BlueprintConfig {
            page_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BlueprintError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_max_tags() {
        let config = BlueprintConfig {
            max_tags: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    fn toml_file(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    #[test]
    fn test_load_from_explicit_file() {
        let file = toml_file(&["page_size = 10", "max_tags = 3"]);

        let config =
            BlueprintConfig::load_layers(BlueprintConfig::builder(), Some(file.path()), None)
                .unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_tags, 3);
    }

    #[test]
    fn test_explicit_file_overrides_user_file() {
        let explicit = toml_file(&["page_size = 10"]);
        let user = toml_file(&["page_size = 7", "max_tags = 4"]);

        let config = BlueprintConfig::load_layers(
            BlueprintConfig::builder(),
            Some(explicit.path()),
            Some(user.path()),
        )
        .unwrap();
        assert_eq!(config.page_size, 10);
        assert_eq!(config.max_tags, 4);
    }

    #[test]
    fn test_defaults_without_files() {
        let config = BlueprintConfig::load_layers(BlueprintConfig::builder(), None, None).unwrap();
        assert_eq!(config, BlueprintConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let file = toml_file(&["page_size = 0"]);
        let result =
            BlueprintConfig::load_layers(BlueprintConfig::builder(), Some(file.path()), None);
        assert!(matches!(result, Err(BlueprintError::InvalidConfig(_))));
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let result = BlueprintConfig::load(Some(Path::new("/nonexistent/blueprint.toml")));
        assert!(matches!(result, Err(BlueprintError::InvalidConfig(_))));
    }

    #[test]
    fn test_template_lists_settings() {
        let template = BlueprintConfig::template();
        assert!(template.contains("page_size"));
        assert!(template.contains("max_tags"));
    }
}
