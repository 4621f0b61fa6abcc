//! YouTube URL validation and conversion onto the alternate watch domain.
//!
//! # Example
//! ```
//! use ytconv_core::{convert_youtube_url, ErrorCode};
//!
//! let result = convert_youtube_url("https://youtu.be/dQw4w9WgXcQ?t=42");
//! assert_eq!(
//!     result.converted_url(),
//!     Some("https://yout-ube.com/watch?v=dQw4w9WgXcQ&t=42")
//! );
//!
//! let result = convert_youtube_url("https://vimeo.com/123");
//! assert_eq!(result.error(), Some(ErrorCode::InvalidUrl));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::ConverterConfig;
use crate::error::{ConfigError, ConvertError, ConvertResult};
use crate::hosts::is_recognized_host;
use crate::recognizer::recognize;

/// Query parameters copied from the source URL, in output order.
pub const PRESERVED_PARAMS: [&str; 4] = ["t", "list", "index", "start"];

// ============================================================================
// Result Types
// ============================================================================

/// Closed set of conversion failure reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    /// Input was empty or whitespace only
    EmptyInput,
    /// Not a URL, not a recognized host, or no video ID in a recognized shape
    InvalidUrl,
    /// Unexpected failure while building the output URL
    ConversionFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EmptyInput => "emptyInput",
            ErrorCode::InvalidUrl => "invalidUrl",
            ErrorCode::ConversionFailed => "conversionFailed",
        }
    }

    /// Human-readable description for display.
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::EmptyInput => "Please enter a YouTube URL",
            ErrorCode::InvalidUrl => "This does not look like a YouTube video URL",
            ErrorCode::ConversionFailed => "The URL could not be converted",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&ConvertError> for ErrorCode {
    fn from(err: &ConvertError) -> Self {
        match err {
            ConvertError::EmptyInput => ErrorCode::EmptyInput,
            ConvertError::Parse(_)
            | ConvertError::UnrecognizedHost(_)
            | ConvertError::VideoIdNotFound => ErrorCode::InvalidUrl,
            ConvertError::Target(_) => ErrorCode::ConversionFailed,
        }
    }
}

/// Outcome of a conversion: a full URL or an error code, never both.
///
/// Serializes as `{"success":true,"convertedUrl":"..."}` or
/// `{"success":false,"error":"invalidUrl"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "ConversionResultRepr", try_from = "ConversionResultRepr")]
pub enum ConversionResult {
    Converted { converted_url: String },
    Failed { error: ErrorCode },
}

impl ConversionResult {
    pub fn success(&self) -> bool {
        matches!(self, ConversionResult::Converted { .. })
    }

    pub fn converted_url(&self) -> Option<&str> {
        match self {
            ConversionResult::Converted { converted_url } => Some(converted_url),
            ConversionResult::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<ErrorCode> {
        match self {
            ConversionResult::Converted { .. } => None,
            ConversionResult::Failed { error } => Some(*error),
        }
    }

    pub fn into_result(self) -> Result<String, ErrorCode> {
        self.into()
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl From<ConversionResult> for Result<String, ErrorCode> {
    fn from(result: ConversionResult) -> Self {
        match result {
            ConversionResult::Converted { converted_url } => Ok(converted_url),
            ConversionResult::Failed { error } => Err(error),
        }
    }
}

/// Flat wire form with `success` as the discriminant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConversionResultRepr {
    success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    converted_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<ErrorCode>,
}

impl From<ConversionResult> for ConversionResultRepr {
    fn from(result: ConversionResult) -> Self {
        match result {
            ConversionResult::Converted { converted_url } => Self {
                success: true,
                converted_url: Some(converted_url),
                error: None,
            },
            ConversionResult::Failed { error } => Self {
                success: false,
                converted_url: None,
                error: Some(error),
            },
        }
    }
}

impl TryFrom<ConversionResultRepr> for ConversionResult {
    type Error = String;

    fn try_from(repr: ConversionResultRepr) -> Result<Self, Self::Error> {
        match (repr.success, repr.converted_url, repr.error) {
            (true, Some(converted_url), None) => Ok(ConversionResult::Converted { converted_url }),
            (false, None, Some(error)) => Ok(ConversionResult::Failed { error }),
            (true, _, _) => Err("successful result must carry only convertedUrl".to_string()),
            (false, _, _) => Err("failed result must carry only error".to_string()),
        }
    }
}

// ============================================================================
// Converter
// ============================================================================

/// Converts recognized YouTube URLs onto a configured target base.
///
/// Immutable after construction; safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Build a converter, rejecting an unusable target base up front.
    pub fn try_new(config: ConverterConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert a raw input string.
    ///
    /// Never panics; every failure is reported as an [`ErrorCode`].
    pub fn convert(&self, input: &str) -> ConversionResult {
        match self.try_convert(input) {
            Ok(converted_url) => {
                debug!(converted_url = %converted_url, "converted YouTube URL");
                ConversionResult::Converted { converted_url }
            }
            Err(e) => {
                let error = ErrorCode::from(&e);
                debug!(error = %e, code = %error, "conversion rejected");
                ConversionResult::Failed { error }
            }
        }
    }

    fn try_convert(&self, input: &str) -> ConvertResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ConvertError::EmptyInput);
        }

        let source = Url::parse(trimmed)?;
        match source.host_str() {
            Some(host) if is_recognized_host(host) => {}
            host => {
                return Err(ConvertError::UnrecognizedHost(
                    host.unwrap_or("unknown").to_string(),
                ));
            }
        }

        let recognized = recognize(&source).ok_or(ConvertError::VideoIdNotFound)?;

        let mut params = vec![("v", recognized.video_id.into_inner())];
        for name in PRESERVED_PARAMS {
            if let Some(value) = first_non_empty_param(&source, name) {
                params.push((name, value));
            }
        }

        let target = self.config.target_url()?;
        Ok(with_params_set(target, &params).into())
    }
}

/// Set each `(name, value)` on the URL's query, replacing every existing pair
/// with that name. Unrelated pairs keep their order ahead of the new ones.
fn with_params_set(mut url: Url, params: &[(&str, String)]) -> Url {
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !params.iter().any(|(name, _)| key == name))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.set_query(None);
    {
        let mut pairs = url.query_pairs_mut();
        for (key, value) in &kept {
            pairs.append_pair(key, value);
        }
        for (name, value) in params {
            pairs.append_pair(name, value);
        }
    }
    url
}

/// First value of `name`, if present and non-empty.
fn first_non_empty_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

// ============================================================================
// Free Functions
// ============================================================================

/// Check whether the input parses as a URL whose host is a recognized
/// YouTube host. Path and query are not inspected.
pub fn is_youtube_url(input: &str) -> bool {
    if input.is_empty() {
        return false;
    }

    match Url::parse(input) {
        Ok(url) => url.host_str().map_or(false, is_recognized_host),
        Err(_) => false,
    }
}

/// Convert a YouTube URL onto `https://yout-ube.com/watch`.
pub fn convert_youtube_url(input: &str) -> ConversionResult {
    Converter::default().convert(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converted(input: &str) -> String {
        match convert_youtube_url(input) {
            ConversionResult::Converted { converted_url } => converted_url,
            ConversionResult::Failed { error } => panic!("{input} failed with {error}"),
        }
    }

    fn failed(input: &str) -> ErrorCode {
        convert_youtube_url(input)
            .error()
            .unwrap_or_else(|| panic!("{input} unexpectedly converted"))
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            converted("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            "https://yout-ube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_short_link_with_timestamp() {
        assert_eq!(
            converted("https://youtu.be/dQw4w9WgXcQ?t=42"),
            "https://yout-ube.com/watch?v=dQw4w9WgXcQ&t=42"
        );
    }

    #[test]
    fn test_input_is_trimmed() {
        assert_eq!(
            converted("  \thttps://youtu.be/dQw4w9WgXcQ \n"),
            "https://yout-ube.com/watch?v=dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_preserved_params_fixed_order() {
        assert_eq!(
            converted("https://www.youtube.com/watch?start=5&index=2&list=PL1&t=10&v=abc"),
            "https://yout-ube.com/watch?v=abc&t=10&list=PL1&index=2&start=5"
        );
    }

    #[test]
    fn test_other_params_dropped() {
        assert_eq!(
            converted("https://www.youtube.com/watch?v=abc&feature=share&si=xyz&utm_source=x&pp=1"),
            "https://yout-ube.com/watch?v=abc"
        );
    }

    #[test]
    fn test_empty_preserved_value_dropped_zero_kept() {
        assert_eq!(
            converted("https://www.youtube.com/watch?v=abc&t=&list=PL1"),
            "https://yout-ube.com/watch?v=abc&list=PL1"
        );
        assert_eq!(
            converted("https://www.youtube.com/watch?v=abc&t=0&index=0"),
            "https://yout-ube.com/watch?v=abc&t=0&index=0"
        );
    }

    #[test]
    fn test_preserved_value_is_reencoded() {
        assert_eq!(
            converted("https://youtu.be/abc?list=a%20b&t=1m2s"),
            "https://yout-ube.com/watch?v=abc&t=1m2s&list=a+b"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(failed(""), ErrorCode::EmptyInput);
        assert_eq!(failed("   "), ErrorCode::EmptyInput);
        assert_eq!(failed("\n\t"), ErrorCode::EmptyInput);
    }

    #[test]
    fn test_invalid_url() {
        assert_eq!(failed("not a url"), ErrorCode::InvalidUrl);
        assert_eq!(failed("https://vimeo.com/123"), ErrorCode::InvalidUrl);
        assert_eq!(failed("https://google.com"), ErrorCode::InvalidUrl);
        assert_eq!(failed("youtube.com/watch?v=abc"), ErrorCode::InvalidUrl);
    }

    #[test]
    fn test_recognized_host_without_id_is_invalid() {
        assert_eq!(failed("https://www.youtube.com/"), ErrorCode::InvalidUrl);
        assert_eq!(failed("https://youtu.be/"), ErrorCode::InvalidUrl);
        assert_eq!(
            failed("https://www.youtube.com/playlist?list=PL1"),
            ErrorCode::InvalidUrl
        );
    }

    #[test]
    fn test_bad_target_is_conversion_failed() {
        let converter = Converter::new(ConverterConfig::with_target_base("::not a base::"));
        let result = converter.convert("https://youtu.be/abc");
        assert_eq!(result.error(), Some(ErrorCode::ConversionFailed));

        // Input checks still run first
        assert_eq!(converter.convert("").error(), Some(ErrorCode::EmptyInput));
        assert_eq!(
            converter.convert("https://vimeo.com/1").error(),
            Some(ErrorCode::InvalidUrl)
        );
    }

    #[test]
    fn test_try_new_rejects_bad_target() {
        assert!(Converter::try_new(ConverterConfig::with_target_base("nope")).is_err());
        assert!(Converter::try_new(ConverterConfig::default()).is_ok());
    }

    #[test]
    fn test_custom_target() {
        let converter =
            Converter::try_new(ConverterConfig::with_target_base("http://localhost:3000/play"))
                .unwrap();
        assert_eq!(
            converter.convert("https://youtu.be/abc?t=3").converted_url(),
            Some("http://localhost:3000/play?v=abc&t=3")
        );
    }

    #[test]
    fn test_target_query_params_are_replaced() {
        let converter = Converter::try_new(ConverterConfig::with_target_base(
            "https://yout-ube.com/watch?v=old&t=1&lang=da",
        ))
        .unwrap();
        assert_eq!(
            converter.convert("https://youtu.be/new?t=42").converted_url(),
            Some("https://yout-ube.com/watch?lang=da&v=new&t=42")
        );

        // A preserved name absent from the source keeps the base's value
        assert_eq!(
            converter.convert("https://youtu.be/new").converted_url(),
            Some("https://yout-ube.com/watch?t=1&lang=da&v=new")
        );
    }

    #[test]
    fn test_converted_url_has_single_video_id() {
        let converter = Converter::new(ConverterConfig::with_target_base(
            "https://yout-ube.com/watch?v=old&v=older",
        ));
        let url = converter
            .convert("https://www.youtube.com/watch?v=new&list=PL1")
            .into_result()
            .unwrap();
        let url = Url::parse(&url).unwrap();
        let ids: Vec<_> = url.query_pairs().filter(|(k, _)| k == "v").collect();
        assert_eq!(ids.len(), 1);
        assert_eq!(ids[0].1, "new");
    }

    #[test]
    fn test_rejection_detail() {
        let converter = Converter::default();
        assert!(matches!(
            converter.try_convert("https://Vimeo.com/1"),
            Err(ConvertError::UnrecognizedHost(host)) if host == "vimeo.com"
        ));
        assert!(matches!(
            converter.try_convert("mailto:someone@youtube.com"),
            Err(ConvertError::UnrecognizedHost(host)) if host == "unknown"
        ));
        assert!(matches!(
            converter.try_convert("not a url"),
            Err(ConvertError::Parse(_))
        ));
        assert!(matches!(
            converter.try_convert("https://youtu.be/"),
            Err(ConvertError::VideoIdNotFound)
        ));
    }

    #[test]
    fn test_is_youtube_url() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=test"));
        assert!(is_youtube_url("https://youtu.be/test"));
        assert!(is_youtube_url("https://www.youtube.com/"));
        assert!(is_youtube_url("http://M.YOUTUBE.COM/anything/at/all"));
        assert!(!is_youtube_url("https://google.com"));
        assert!(!is_youtube_url("not a url"));
        assert!(!is_youtube_url(""));
        assert!(!is_youtube_url("youtube.com/watch?v=test"));
    }

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::EmptyInput.to_string(), "emptyInput");
        assert_eq!(ErrorCode::InvalidUrl.to_string(), "invalidUrl");
        assert_eq!(ErrorCode::ConversionFailed.to_string(), "conversionFailed");
        assert_eq!(
            serde_json::to_string(&ErrorCode::ConversionFailed).unwrap(),
            r#""conversionFailed""#
        );
    }

    #[test]
    fn test_result_json_shape() {
        let ok = convert_youtube_url("https://youtu.be/abc");
        assert_eq!(
            ok.to_json().unwrap(),
            r#"{"success":true,"convertedUrl":"https://yout-ube.com/watch?v=abc"}"#
        );

        let err = convert_youtube_url("");
        assert_eq!(
            err.to_json().unwrap(),
            r#"{"success":false,"error":"emptyInput"}"#
        );
    }

    #[test]
    fn test_result_json_rejects_ambiguous() {
        let both = r#"{"success":true,"convertedUrl":"x","error":"invalidUrl"}"#;
        assert!(serde_json::from_str::<ConversionResult>(both).is_err());

        let neither = r#"{"success":false}"#;
        assert!(serde_json::from_str::<ConversionResult>(neither).is_err());

        let failed: ConversionResult =
            serde_json::from_str(r#"{"success":false,"error":"invalidUrl"}"#).unwrap();
        assert_eq!(failed.error(), Some(ErrorCode::InvalidUrl));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(
            convert_youtube_url("https://youtu.be/abc").into_result(),
            Ok("https://yout-ube.com/watch?v=abc".to_string())
        );
        assert_eq!(
            convert_youtube_url("https://vimeo.com/1").into_result(),
            Err(ErrorCode::InvalidUrl)
        );
    }
}
