//! # Video Embeds
//!
//! Resolves a user-supplied video link into an embeddable URL for one of the
//! supported providers.
//!
//! | Provider | Embed URL |
//! |----------|-----------|
//! | YouTube | `//www.youtube.com/embed/<id>` |
//! | Vimeo | `//player.vimeo.com/video/<id>` |
//! | Dailymotion | `//www.dailymotion.com/embed/video/<id>` |
//! | Bilibili | `//player.bilibili.com/player.html?bvid=<id>` |
//! | Niconico | `//embed.nicovideo.jp/watch/<id>` |
//! | PeerTube | `//<host>/videos/embed/<uuid>` |
//!
//! Rules are tried in that order and the first match wins. Every capture is
//! limited to URL-safe characters, so whatever follows the id in the input
//! (markup, scripts, tracking parameters) never reaches the embed URL.
//! Feeding an embed URL back in yields the same embed URL.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    Youtube,
    Vimeo,
    Dailymotion,
    Peertube,
    Bilibili,
    Niconico,
}

impl VideoProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoProvider::Youtube => "youtube",
            VideoProvider::Vimeo => "vimeo",
            VideoProvider::Dailymotion => "dailymotion",
            VideoProvider::Peertube => "peertube",
            VideoProvider::Bilibili => "bilibili",
            VideoProvider::Niconico => "niconico",
        }
    }
}

impl fmt::Display for VideoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoProvider {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "youtube" => Ok(VideoProvider::Youtube),
            "vimeo" => Ok(VideoProvider::Vimeo),
            "dailymotion" => Ok(VideoProvider::Dailymotion),
            "peertube" => Ok(VideoProvider::Peertube),
            "bilibili" => Ok(VideoProvider::Bilibili),
            "niconico" => Ok(VideoProvider::Niconico),
            _ => Err(()),
        }
    }
}

/// A recognized video: the embed URL and its provider always travel together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoEmbed {
    pub embed_url: String,
    pub provider: VideoProvider,
}

struct Rule {
    provider: VideoProvider,
    pattern: Regex,
    embed: fn(&Captures) -> String,
}

// Host prefix shared by the fixed-host rules: start of input, after `//`, or after a subdomain dot.
const HOST_START: &str = r"(?:^|//|\.)";

fn rule(provider: VideoProvider, pattern: &str, embed: fn(&Captures) -> String) -> Rule {
    Rule {
        provider,
        pattern: Regex::new(pattern).unwrap_or_else(|e| panic!("invalid {provider} pattern: {e}")),
        embed,
    }
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        rule(
            VideoProvider::Youtube,
            &format!(
                r"(?i){HOST_START}(?:youtu\.be/|youtube(?:-nocookie)?\.com\S*?[^\w\s-])([a-z0-9_-]{{11}})(?:[^a-z0-9_-]|$)"
            ),
            |c| format!("//www.youtube.com/embed/{}", &c[1]),
        ),
        rule(
            VideoProvider::Vimeo,
            &format!(
                r"(?i){HOST_START}vimeo\.com/(?:channels/(?:[a-z0-9_]+/)?|groups/[^/\s]*/videos/|album/\d+/video/|video/)?(\d+)(?:\D|$)"
            ),
            |c| format!("//player.vimeo.com/video/{}", &c[1]),
        ),
        rule(
            VideoProvider::Dailymotion,
            &format!(
                r"(?i){HOST_START}(?:dailymotion\.com/(?:embed/)?video/|dai\.ly/)([a-z0-9]+)"
            ),
            |c| format!("//www.dailymotion.com/embed/video/{}", &c[1]),
        ),
        rule(
            VideoProvider::Bilibili,
            &format!(
                r"(?i){HOST_START}(?:bilibili\.com/video/|bilibili\.com/player\.html\?bvid=)(BV[0-9a-z]{{10}})(?:[^0-9a-z]|$)"
            ),
            |c| format!("//player.bilibili.com/player.html?bvid={}", &c[1]),
        ),
        rule(
            VideoProvider::Niconico,
            &format!(
                r"(?i){HOST_START}(?:nicovideo\.jp/watch/|nico\.ms/)((?:sm|nm|so)\d+)"
            ),
            |c| format!("//embed.nicovideo.jp/watch/{}", &c[1]),
        ),
        rule(
            VideoProvider::Peertube,
            r"(?i)^(?:https?:)?(?://)?([a-z0-9.-]+\.[a-z]{2,}(?::\d{1,5})?)/videos/(?:watch|embed)/([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})(?:[^0-9a-f-]|$)",
            |c| format!("//{}/videos/embed/{}", &c[1], &c[2]),
        ),
    ]
});

/// Resolve `input` into an embeddable video, or `None` when nothing matches.
///
/// # Examples
/// ```
/// use blueprintapp::video::{resolve_video, VideoProvider};
///
/// let video = resolve_video("youtu.be/5qap5aO4i9A").unwrap();
/// assert_eq!(video.embed_url, "//www.youtube.com/embed/5qap5aO4i9A");
/// assert_eq!(video.provider, VideoProvider::Youtube);
///
/// assert!(resolve_video("invalid").is_none());
/// ```
pub fn resolve_video(input: &str) -> Option<VideoEmbed> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    RULES.iter().find_map(|rule| {
        rule.pattern.captures(input).map(|caps| VideoEmbed {
            embed_url: (rule.embed)(&caps),
            provider: rule.provider,
        })
    })
}
