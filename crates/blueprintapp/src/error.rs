use thiserror::Error;

use crate::form::FormErrors;

#[derive(Error, Debug)]
pub enum BlueprintError {
    #[error("Blueprint not found: {0}")]
    BlueprintNotFound(u64),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Only the author can modify this blueprint")]
    Forbidden,

    #[error("Invalid encoding in submitted form")]
    InvalidEncoding,

    /// `tags` is the normalized textarea to redisplay with the errors.
    #[error("Form is invalid: {errors}")]
    Validation { errors: FormErrors, tags: String },

    #[error("Invalid page: {0}")]
    InvalidPage(String),

    #[error("Page {requested} is out of range (1-{page_count})")]
    PageOutOfRange { requested: u64, page_count: u64 },

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, BlueprintError>;
