//! Relative "time ago" strings for listings.
//!
//! Buckets are floor-based and always use the plural unit, so one day reads
//! `1 days ago`:
//!
//! | Elapsed | Output |
//! |---------|--------|
//! | under a minute (or in the future) | `few seconds ago` |
//! | under an hour | `N minutes ago` |
//! | under a day | `N hours ago` |
//! | a day or more | `N days ago` |

use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use timeago::{BoxedLanguage, Formatter, Language, TimeUnit};

use crate::error::{BlueprintError, Result};

/// Storage format for timestamps (always UTC).
pub const STORED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TOO_RECENT: &str = "few seconds ago";

/// English with the plural unit for every count.
#[derive(Debug, Clone, Copy, Default)]
struct PluralEnglish;

impl Language for PluralEnglish {
    fn too_low(&self) -> &'static str {
        TOO_RECENT
    }

    fn too_high(&self) -> &'static str {
        "old"
    }

    fn ago(&self) -> &'static str {
        "ago"
    }

    fn get_word(&self, tu: TimeUnit, _x: u64) -> &'static str {
        match tu {
            TimeUnit::Nanoseconds => "nanoseconds",
            TimeUnit::Microseconds => "microseconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Years => "years",
        }
    }

    fn clone_boxed(&self) -> BoxedLanguage {
        Box::new(*self)
    }
}

static FORMATTER: Lazy<Formatter<PluralEnglish>> = Lazy::new(|| {
    let mut formatter = Formatter::with_language(PluralEnglish);
    formatter
        .num_items(1)
        .min_unit(TimeUnit::Minutes)
        .max_unit(TimeUnit::Days)
        .too_low(TOO_RECENT);
    formatter
});

pub fn format_since(t: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now
        .signed_duration_since(t)
        .max(chrono::Duration::zero())
        .to_std()
        .unwrap_or_default();
    FORMATTER.convert(elapsed)
}

/// Parse a stored timestamp: `YYYY-MM-DD HH:MM:SS` in UTC, or RFC 3339.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, STORED_FORMAT) {
        return Ok(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| BlueprintError::InvalidTimestamp(raw.to_string()))
}

/// [`format_since`] for a stored timestamp string.
pub fn since_str(stored: &str, now: DateTime<Utc>) -> Result<String> {
    Ok(format_since(parse_timestamp(stored)?, now))
}
