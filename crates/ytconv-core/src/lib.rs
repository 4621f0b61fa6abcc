//! YouTube URL recognition and rewriting.
//!
//! This crate provides:
//! - Validation of YouTube URLs against a closed host set
//! - Video ID extraction from watch, short-link, embed, `/v/`, shorts and live shapes
//! - Conversion onto an alternate watch domain, keeping `t`, `list`, `index` and `start`
//! - Scheme repair for user-typed input
//!
//! Everything here is synchronous, stateless and free of I/O.

pub mod config;
pub mod converter;
pub mod error;
pub mod hosts;
pub mod normalize;
pub mod recognizer;

// Re-export common types
pub use config::{ConverterConfig, DEFAULT_TARGET_BASE, TARGET_BASE_ENV};
pub use converter::{
    convert_youtube_url, is_youtube_url, ConversionResult, Converter, ErrorCode, PRESERVED_PARAMS,
};
pub use error::{ConfigError, ConvertError, ConvertResult};
pub use hosts::{HostFamily, RECOGNIZED_HOSTS};
pub use normalize::normalize_url;
pub use recognizer::{extract_video_id, recognize, recognize_str, Recognized, UrlShape, VideoId};
