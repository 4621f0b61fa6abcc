//! Scheme repair for user-typed URLs.
//!
//! Callers run this before validation; the converter never calls it.

use tracing::trace;

/// Hosts that, typed without a scheme, get `https://` prepended.
/// An optional `www.` in front of any of them is accepted.
const BARE_HOST_PREFIXES: [&str; 4] = [
    "youtube.com",
    "youtu.be",
    "m.youtube.com",
    "music.youtube.com",
];

/// Add `https://` when the input has no http(s) scheme.
///
/// Purely syntactic: the result is not validated, and inputs that already
/// start with `http://` or `https://` (any case) come back trimmed but
/// otherwise unchanged.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();

    if starts_with_bare_youtube_host(trimmed) {
        trace!(input = trimmed, "bare YouTube host, adding https scheme");
        return format!("https://{}", trimmed);
    }

    if !has_http_scheme(trimmed) {
        trace!(input = trimmed, "no http(s) scheme, adding https scheme");
        return format!("https://{}", trimmed);
    }

    trimmed.to_string()
}

fn starts_with_bare_youtube_host(s: &str) -> bool {
    let rest = strip_prefix_ignore_case(s, "www.").unwrap_or(s);
    BARE_HOST_PREFIXES
        .iter()
        .any(|host| strip_prefix_ignore_case(rest, host).is_some())
}

fn has_http_scheme(s: &str) -> bool {
    strip_prefix_ignore_case(s, "http://").is_some()
        || strip_prefix_ignore_case(s, "https://").is_some()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_hosts_get_https() {
        assert_eq!(normalize_url("youtube.com/x"), "https://youtube.com/x");
        assert_eq!(
            normalize_url("youtube.com/watch?v=test"),
            "https://youtube.com/watch?v=test"
        );
        assert_eq!(
            normalize_url("www.youtube.com/watch?v=test"),
            "https://www.youtube.com/watch?v=test"
        );
        assert_eq!(normalize_url("youtu.be/test"), "https://youtu.be/test");
        assert_eq!(normalize_url("m.youtube.com/watch?v=a"), "https://m.youtube.com/watch?v=a");
        assert_eq!(normalize_url("MUSIC.YouTube.com/watch?v=a"), "https://MUSIC.YouTube.com/watch?v=a");
    }

    #[test]
    fn test_existing_scheme_unchanged() {
        assert_eq!(normalize_url("https://youtube.com/x"), "https://youtube.com/x");
        assert_eq!(
            normalize_url("https://youtube.com/watch?v=test"),
            "https://youtube.com/watch?v=test"
        );
        assert_eq!(normalize_url("http://youtu.be/abc"), "http://youtu.be/abc");
        assert_eq!(normalize_url("HTTPS://YOUTU.BE/abc"), "HTTPS://YOUTU.BE/abc");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_url("  youtu.be/abc \n"), "https://youtu.be/abc");
        assert_eq!(normalize_url("  https://youtu.be/abc  "), "https://youtu.be/abc");
    }

    #[test]
    fn test_other_inputs_get_https_without_validation() {
        assert_eq!(normalize_url("vimeo.com/123"), "https://vimeo.com/123");
        assert_eq!(normalize_url("not a url"), "https://not a url");
        assert_eq!(normalize_url("ftp://youtube.com/x"), "https://ftp://youtube.com/x");
        assert_eq!(normalize_url(""), "https://");
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert_eq!(normalize_url("ñyoutube.com"), "https://ñyoutube.com");
        assert_eq!(normalize_url("ww€"), "https://ww€");
    }
}
