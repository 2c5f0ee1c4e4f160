//! Video link embedding for the storefront
//!
//! This crate classifies product and artisan video links as YouTube, Vimeo
//! or Gumlet, builds iframe embed and thumbnail URLs for them, and validates
//! links entered in content-management forms.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod embeds;
pub mod playback;
pub mod validation;

pub use config::{ConfigError, HostMatching, ResolverConfig};
pub use embeds::{ParsedVideoUrl, VideoLinkResolver, VideoPlatform, YouTubeThumbnailQuality};
pub use playback::{DirectVideoFormat, PlaybackSource};
pub use validation::{ValidationResult, VideoLinkError};

/// Detect which platform a URL belongs to
pub fn detect_platform(url: &str) -> Option<VideoPlatform> {
    VideoLinkResolver::default().detect_platform(url)
}

/// Extract the video ID for a platform from a URL
pub fn extract_video_id(url: &str, platform: VideoPlatform) -> Option<String> {
    VideoLinkResolver::default().extract_video_id(url, platform)
}

/// Resolve a URL into its embeddable form
pub fn resolve(url: &str) -> Option<ParsedVideoUrl> {
    VideoLinkResolver::default().resolve(url)
}

/// Validate a link for inline form feedback
pub fn validate(url: &str) -> ValidationResult {
    VideoLinkResolver::default().validate(url)
}
