//! # Edit Properties Form
//!
//! Typed request DTO for the blueprint "edit properties" form.
//!
//! Handling is split in two steps:
//!
//! 1. [`EditPropertiesForm::decode`] turns the raw submitted bytes into text.
//!    A single field with invalid UTF-8 rejects the whole submission with
//!    [`BlueprintError::InvalidEncoding`].
//! 2. [`EditPropertiesForm::validate`] checks each field and either returns
//!    [`ValidProperties`] or a [`FormErrors`] listing one message per bad field.
//!
//! Field rules:
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | `title` | required after trimming | `Title is required` |
//! | `exposure` | `public`, `unlisted` or `private` | `Exposure is invalid` |
//! | `expiration` | `keep` (or empty), `remove`, `1h`, `1d`, `1w` | `Expiration is invalid` |
//! | `video` | empty, or a supported video link | `Video is invalid` |
//! | `tags` | never rejected, see [`crate::tags::normalize`] | |

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::error::{BlueprintError, Result};
use crate::model::Exposure;
use crate::video::{resolve_video, VideoEmbed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Title,
    Exposure,
    Expiration,
    Video,
}

/// Field-level validation failures, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    errors: Vec<(FormField, String)>,
}

impl FormErrors {
    pub fn add(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(|(_, m)| m.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpirationChoice {
    Keep,
    Remove,
    #[serde(rename = "1h")]
    OneHour,
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "1w")]
    OneWeek,
}

impl ExpirationChoice {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "" | "keep" => Some(ExpirationChoice::Keep),
            "remove" => Some(ExpirationChoice::Remove),
            "1h" => Some(ExpirationChoice::OneHour),
            "1d" => Some(ExpirationChoice::OneDay),
            "1w" => Some(ExpirationChoice::OneWeek),
            _ => None,
        }
    }

    /// The new expiration given the current one.
    pub fn apply(
        &self,
        current: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Option<DateTime<Utc>> {
        match self {
            ExpirationChoice::Keep => current,
            ExpirationChoice::Remove => None,
            ExpirationChoice::OneHour => Some(now + Duration::hours(1)),
            ExpirationChoice::OneDay => Some(now + Duration::days(1)),
            ExpirationChoice::OneWeek => Some(now + Duration::weeks(1)),
        }
    }
}

/// Submitted fields exactly as received.
#[derive(Debug, Clone, Default)]
pub struct RawPropertiesForm {
    pub title: Vec<u8>,
    pub description: Vec<u8>,
    pub exposure: Vec<u8>,
    pub expiration: Vec<u8>,
    pub tags: Vec<u8>,
    pub video: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPropertiesForm {
    pub title: String,
    pub description: String,
    pub exposure: String,
    pub expiration: String,
    pub tags: String,
    pub video: String,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidProperties {
    pub title: String,
    pub description: Option<String>,
    pub exposure: Exposure,
    pub expiration: ExpirationChoice,
    /// Raw textarea, normalized by the command against the tag dictionary.
    pub tags: String,
    pub video: Option<VideoEmbed>,
}

fn decode_field(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| BlueprintError::InvalidEncoding)
}

impl EditPropertiesForm {
    pub fn decode(raw: RawPropertiesForm) -> Result<Self> {
        Ok(Self {
            title: decode_field(raw.title)?,
            description: decode_field(raw.description)?,
            exposure: decode_field(raw.exposure)?,
            expiration: decode_field(raw.expiration)?,
            tags: decode_field(raw.tags)?,
            video: decode_field(raw.video)?,
        })
    }

    pub fn validate(&self) -> std::result::Result<ValidProperties, FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.add(FormField::Title, "Title is required");
        }

        let exposure = self.exposure.trim().parse::<Exposure>().ok();
        if exposure.is_none() {
            errors.add(FormField::Exposure, "Exposure is invalid");
        }

        let expiration = ExpirationChoice::parse(self.expiration.trim());
        if expiration.is_none() {
            errors.add(FormField::Expiration, "Expiration is invalid");
        }

        let video_input = self.video.trim();
        let video = resolve_video(video_input);
        if !video_input.is_empty() && video.is_none() {
            errors.add(FormField::Video, "Video is invalid");
        }

        match (exposure, expiration) {
            (Some(exposure), Some(expiration)) if !errors.has_errors() => {
                let description = self.description.trim();
                Ok(ValidProperties {
                    title: title.to_string(),
                    description: (!description.is_empty()).then(|| description.to_string()),
                    exposure,
                    expiration,
                    tags: self.tags.clone(),
                    video,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::VideoProvider;
    use chrono::TimeZone;

    fn valid_form() -> EditPropertiesForm {
        EditPropertiesForm {
            title: "My blueprint".to_string(),
            description: "".to_string(),
            exposure: "public".to_string(),
            expiration: "keep".to_string(),
            tags: "tag 1".to_string(),
            video: "".to_string(),
        }
    }

    #[test]
    fn test_decode_valid_utf8() {
        let raw = RawPropertiesForm {
            title: "Title".as_bytes().to_vec(),
            exposure: b"public".to_vec(),
            ..Default::default()
        };
        let form = EditPropertiesForm::decode(raw).unwrap();
        assert_eq!(form.title, "Title");
        assert_eq!(form.exposure, "public");
    }

    #[test]
    fn test_decode_invalid_encoding_rejects_form() {
        let raw = RawPropertiesForm {
            title: b"Title".to_vec(),
            tags: vec![b't', 0xC3, 0x28],
            ..Default::default()
        };
        assert!(matches!(
            EditPropertiesForm::decode(raw),
            Err(BlueprintError::InvalidEncoding)
        ));
    }

    #[test]
    fn test_valid_form() {
        let props = valid_form().validate().unwrap();
        assert_eq!(props.title, "My blueprint");
        assert_eq!(props.description, None);
        assert_eq!(props.exposure, Exposure::Public);
        assert_eq!(props.expiration, ExpirationChoice::Keep);
        assert_eq!(props.video, None);
    }

    #[test]
    fn test_title_required() {
        let form = EditPropertiesForm {
            title: "   ".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Title), Some("Title is required"));
    }

    #[test]
    fn test_exposure_invalid() {
        let form = EditPropertiesForm {
            exposure: "secret".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Exposure), Some("Exposure is invalid"));
    }

    #[test]
    fn test_expiration_choices() {
        for (raw, expected) in [
            ("", ExpirationChoice::Keep),
            ("remove", ExpirationChoice::Remove),
            ("1h", ExpirationChoice::OneHour),
            ("1d", ExpirationChoice::OneDay),
            ("1w", ExpirationChoice::OneWeek),
        ] {
            let form = EditPropertiesForm {
                expiration: raw.to_string(),
                ..valid_form()
            };
            assert_eq!(form.validate().unwrap().expiration, expected);
        }

        let form = EditPropertiesForm {
            expiration: "forever".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Expiration), Some("Expiration is invalid"));
    }

    #[test]
    fn test_expiration_apply() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let current = Some(now + Duration::days(30));
        assert_eq!(ExpirationChoice::Keep.apply(current, now), current);
        assert_eq!(ExpirationChoice::Remove.apply(current, now), None);
        assert_eq!(
            ExpirationChoice::OneHour.apply(None, now),
            Some(now + Duration::hours(1))
        );
        assert_eq!(
            ExpirationChoice::OneWeek.apply(None, now),
            Some(now + Duration::days(7))
        );
    }

    #[test]
    fn test_video_resolved() {
        let form = EditPropertiesForm {
            video: " youtu.be/5qap5aO4i9A ".to_string(),
            ..valid_form()
        };
        let video = form.validate().unwrap().video.unwrap();
        assert_eq!(video.provider, VideoProvider::Youtube);
        assert_eq!(video.embed_url, "//www.youtube.com/embed/5qap5aO4i9A");
    }

    #[test]
    fn test_video_invalid() {
        let form = EditPropertiesForm {
            video: "invalid".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FormField::Video), Some("Video is invalid"));
    }

    #[test]
    fn test_bad_tags_never_error() {
        let form = EditPropertiesForm {
            tags: "invalid@tag\n\n   ".to_string(),
            ..valid_form()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let form = EditPropertiesForm {
            title: "".to_string(),
            video: "nope".to_string(),
            ..valid_form()
        };
        let errors = form.validate().unwrap_err();
        let fields: Vec<FormField> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![FormField::Title, FormField::Video]);
        assert_eq!(errors.to_string(), "Title is required; Video is invalid");
    }
}
