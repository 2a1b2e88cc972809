//! Tag line validation.
//!
//! A tag line is accepted when, after whitespace collapsing:
//! - It is not empty
//! - It only contains ASCII letters, digits, `.`, `_`, `-` and spaces

/// Validates a single, already collapsed tag line.
///
/// # Examples
/// ```
/// use blueprintapp::tags::validation::validate_tag_line;
///
/// assert!(validate_tag_line("tag 1").is_ok());
/// assert!(validate_tag_line("v4.27").is_ok());
/// assert!(validate_tag_line("snake_case-tag").is_ok());
///
/// assert!(validate_tag_line("").is_err());
/// assert!(validate_tag_line("invalid@tag").is_err());
/// ```
pub fn validate_tag_line(line: &str) -> Result<(), TagValidationError> {
    if line.is_empty() {
        return Err(TagValidationError::Empty);
    }

    match line.chars().find(|ch| !is_valid_tag_char(*ch)) {
        Some(ch) => Err(TagValidationError::InvalidCharacter(ch)),
        None => Ok(()),
    }
}

/// Checks if a character is allowed in a tag line.
pub(crate) fn is_valid_tag_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-' | ' ')
}

/// Why a tag line was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValidationError {
    /// Line is empty after trimming
    Empty,
    /// Line contains a forbidden character
    InvalidCharacter(char),
}

impl std::fmt::Display for TagValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagValidationError::Empty => write!(f, "tag cannot be empty"),
            TagValidationError::InvalidCharacter(ch) => {
                write!(
                    f,
                    "tag contains invalid character '{}' (only letters, digits, '.', '_', '-' and spaces allowed)",
                    ch
                )
            }
        }
    }
}

impl std::error::Error for TagValidationError {}
