//! Recognized YouTube hostnames.
//!
//! The host set is closed: membership is a case-insensitive equality check
//! against the names below, with no suffix or wildcard matching. Lookalike
//! hosts such as `evil-youtube.com` or `youtube.com.example.org` are rejected.

use serde::{Deserialize, Serialize};
use url::Url;

/// Short-link hosts. The video ID is the first path segment.
pub const SHORT_LINK_HOSTS: [&str; 2] = ["youtu.be", "www.youtu.be"];

/// Standard hosts. The video ID comes from `?v=` or a known path prefix.
pub const STANDARD_HOSTS: [&str; 4] = [
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
];

/// Every hostname accepted as a conversion source.
pub const RECOGNIZED_HOSTS: [&str; 6] = [
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "youtu.be",
    "www.youtu.be",
];

/// Which extraction rules apply to a recognized host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostFamily {
    /// `youtube.com`, `www.`, `m.` and `music.` variants
    Standard,
    /// `youtu.be` and `www.youtu.be`
    ShortLink,
}

impl HostFamily {
    /// Classify a bare hostname. Returns `None` for hosts outside the set.
    pub fn classify(host: &str) -> Option<Self> {
        if SHORT_LINK_HOSTS.iter().any(|h| h.eq_ignore_ascii_case(host)) {
            Some(HostFamily::ShortLink)
        } else if STANDARD_HOSTS.iter().any(|h| h.eq_ignore_ascii_case(host)) {
            Some(HostFamily::Standard)
        } else {
            None
        }
    }

    /// Classify the host of a parsed URL.
    pub fn of_url(url: &Url) -> Option<Self> {
        url.host_str().and_then(Self::classify)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostFamily::Standard => "standard",
            HostFamily::ShortLink => "short_link",
        }
    }
}

impl std::fmt::Display for HostFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Check whether a bare hostname belongs to the recognized set.
pub fn is_recognized_host(host: &str) -> bool {
    RECOGNIZED_HOSTS.iter().any(|h| h.eq_ignore_ascii_case(host))
}
