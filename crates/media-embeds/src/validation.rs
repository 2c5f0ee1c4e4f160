//! Validation of video links entered in content-management forms
//!
//! Checks run in a fixed order and stop at the first failure, so the user
//! always sees a single message.

use crate::embeds::{ParsedVideoUrl, VideoLinkResolver, VideoPlatform};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a video link is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VideoLinkError {
    /// Empty or whitespace-only input
    #[error("URL is required")]
    Required,

    /// Input is not an absolute URL
    #[error("Invalid URL format")]
    InvalidFormat,

    /// Valid URL from an unrecognised host
    #[error("Unsupported video platform. Supported: YouTube, Vimeo, Gumlet")]
    UnsupportedPlatform,

    /// Recognised host but no video ID in the URL
    #[error("Could not extract video ID from URL")]
    MissingVideoId,
}

/// Result type for video link checks
pub type Result<T> = std::result::Result<T, VideoLinkError>;

/// Outcome of validating a video link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether the link can be embedded
    pub is_valid: bool,
    /// Platform name when valid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    /// User-facing error message when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// Create a passing result
    pub fn valid(platform: VideoPlatform) -> Self {
        Self { is_valid: true, platform: Some(platform.name().to_string()), error: None }
    }

    /// Create a failing result
    pub fn invalid(error: VideoLinkError) -> Self {
        Self { is_valid: false, platform: None, error: Some(error.to_string()) }
    }
}

impl From<Result<VideoPlatform>> for ValidationResult {
    fn from(result: Result<VideoPlatform>) -> Self {
        match result {
            Ok(platform) => Self::valid(platform),
            Err(error) => Self::invalid(error),
        }
    }
}

impl VideoLinkResolver {
    /// Check a link and return the platform it belongs to
    pub fn check_platform(&self, url: &str) -> Result<VideoPlatform> {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(VideoLinkError::Required);
        }

        if url::Url::parse(trimmed).is_err() {
            return Err(VideoLinkError::InvalidFormat);
        }

        let platform = self.detect_platform(trimmed).ok_or(VideoLinkError::UnsupportedPlatform)?;

        if self.extract_video_id(trimmed, platform).is_none() {
            return Err(VideoLinkError::MissingVideoId);
        }

        Ok(platform)
    }

    /// Check a link and resolve it on success
    pub fn check(&self, url: &str) -> Result<ParsedVideoUrl> {
        self.check_platform(url)?;
        self.resolve(url).ok_or(VideoLinkError::MissingVideoId)
    }

    /// Validate a link for inline form feedback
    pub fn validate(&self, url: &str) -> ValidationResult {
        self.check_platform(url).into()
    }
}
