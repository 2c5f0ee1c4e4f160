//! Resolver configuration
//!
//! Settings are stored as camelCase JSON next to the rest of the storefront
//! settings. Every field has a default so partial documents load cleanly.

use crate::embeds::YouTubeThumbnailQuality;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration document
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// How a URL is matched against platform host markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostMatching {
    /// Marker may appear anywhere in the URL (lenient)
    #[default]
    Substring,
    /// Marker must be the URL host or a parent domain of it
    Host,
}

/// Configuration for [`VideoLinkResolver`](crate::VideoLinkResolver)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Platform matching strategy
    #[serde(default)]
    pub host_matching: HostMatching,

    /// Thumbnail quality used for resolved YouTube links
    #[serde(default)]
    pub youtube_thumbnail_quality: YouTubeThumbnailQuality,

    /// Capture `t=`/`start=` offsets from links
    #[serde(default = "default_true")]
    pub capture_start_time: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            host_matching: HostMatching::default(),
            youtube_thumbnail_quality: YouTubeThumbnailQuality::default(),
            capture_start_time: true,
        }
    }
}

impl ResolverConfig {
    /// Parse configuration from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::debug!("Loaded resolver config from {}", path.display());
        Ok(config)
    }
}
