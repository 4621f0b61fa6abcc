//! Video ID extraction from recognized YouTube URLs.
//!
//! Supported shapes, in the order they are tried:
//! - https://youtu.be/VIDEO_ID (short-link hosts only)
//! - https://youtube.com/watch?v=VIDEO_ID
//! - https://youtube.com/embed/VIDEO_ID
//! - https://youtube.com/v/VIDEO_ID
//! - https://youtube.com/shorts/VIDEO_ID
//! - https://youtube.com/live/VIDEO_ID
//!
//! The standard shapes apply to every host in the standard family
//! (`www.`, `m.` and `music.` included). IDs are opaque: any non-empty
//! token is accepted, with no length or alphabet check.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;
use url::Url;

use crate::hosts::HostFamily;

/// Opaque YouTube video identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wrap a token, rejecting the empty string.
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The URL shape a video ID was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrlShape {
    /// youtu.be/VIDEO_ID
    ShortLink,
    /// /watch?v=VIDEO_ID (or `v` on any standard-host path)
    Watch,
    /// /embed/VIDEO_ID
    Embed,
    /// /v/VIDEO_ID
    LegacyV,
    /// /shorts/VIDEO_ID
    Shorts,
    /// /live/VIDEO_ID
    Live,
}

impl UrlShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlShape::ShortLink => "short_link",
            UrlShape::Watch => "watch",
            UrlShape::Embed => "embed",
            UrlShape::LegacyV => "legacy_v",
            UrlShape::Shorts => "shorts",
            UrlShape::Live => "live",
        }
    }
}

impl fmt::Display for UrlShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A successfully recognized URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recognized {
    pub video_id: VideoId,
    pub shape: UrlShape,
    pub host_family: HostFamily,
}

type Matcher = fn(&Url) -> Option<VideoId>;

/// Standard-host matchers, first match wins.
const STANDARD_MATCHERS: [(UrlShape, Matcher); 5] = [
    (UrlShape::Watch, from_watch_param),
    (UrlShape::Embed, from_embed_path),
    (UrlShape::LegacyV, from_v_path),
    (UrlShape::Shorts, from_shorts_path),
    (UrlShape::Live, from_live_path),
];

/// Recognize a parsed URL.
///
/// Returns `None` when the host is outside the recognized set or no shape
/// yields a non-empty ID.
pub fn recognize(url: &Url) -> Option<Recognized> {
    let host_family = HostFamily::of_url(url)?;

    let found = match host_family {
        HostFamily::ShortLink => from_short_link(url).map(|id| (UrlShape::ShortLink, id)),
        HostFamily::Standard => STANDARD_MATCHERS
            .iter()
            .find_map(|(shape, matcher)| matcher(url).map(|id| (*shape, id))),
    };

    match found {
        Some((shape, video_id)) => {
            trace!(%shape, video_id = %video_id, "recognized YouTube URL");
            Some(Recognized {
                video_id,
                shape,
                host_family,
            })
        }
        None => {
            trace!(%host_family, path = url.path(), "no video ID in YouTube URL");
            None
        }
    }
}

/// Parse and recognize a raw string. Unparseable input yields `None`.
pub fn recognize_str(input: &str) -> Option<Recognized> {
    match Url::parse(input) {
        Ok(url) => recognize(&url),
        Err(e) => {
            trace!(error = %e, "input is not an absolute URL");
            None
        }
    }
}

/// Extract the video ID from a raw string, if it is a recognized YouTube URL.
pub fn extract_video_id(input: &str) -> Option<VideoId> {
    recognize_str(input.trim()).map(|r| r.video_id)
}

/// First path segment of a short link.
fn from_short_link(url: &Url) -> Option<VideoId> {
    let path = url.path();
    let rest = path.strip_prefix('/').unwrap_or(path);
    VideoId::new(first_segment(rest))
}

/// First `v` query value. An empty first value does not fall through to later ones.
fn from_watch_param(url: &Url) -> Option<VideoId> {
    url.query_pairs()
        .find(|(key, _)| key == "v")
        .and_then(|(_, value)| VideoId::new(value.into_owned()))
}

fn from_embed_path(url: &Url) -> Option<VideoId> {
    from_path_prefix(url, "/embed/")
}

fn from_v_path(url: &Url) -> Option<VideoId> {
    from_path_prefix(url, "/v/")
}

fn from_shorts_path(url: &Url) -> Option<VideoId> {
    from_path_prefix(url, "/shorts/")
}

fn from_live_path(url: &Url) -> Option<VideoId> {
    from_path_prefix(url, "/live/")
}

/// ID segment directly after a path prefix anchored at the path start.
fn from_path_prefix(url: &Url, prefix: &str) -> Option<VideoId> {
    url.path()
        .strip_prefix(prefix)
        .and_then(|rest| VideoId::new(first_segment(rest)))
}

/// Text up to the next `/` or `?`.
fn first_segment(s: &str) -> &str {
    let end = s.find(|c: char| c == '/' || c == '?').unwrap_or(s.len());
    &s[..end]
}
