//! Video link classification and embedding
//!
//! This module turns product and artisan video links pasted by staff into
//! embeddable player URLs. YouTube, Vimeo and Gumlet links are recognised;
//! anything else is left to the caller to play as a direct file.

use crate::config::{HostMatching, ResolverConfig};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Supported video hosting platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VideoPlatform {
    /// YouTube (`youtube.com`, `youtu.be`)
    YouTube,
    /// Vimeo (`vimeo.com`)
    Vimeo,
    /// Gumlet (`gumlet.com`, `gumlet.tv`)
    Gumlet,
}

impl VideoPlatform {
    /// All platforms in detection priority order
    pub const ALL: [VideoPlatform; 3] =
        [VideoPlatform::YouTube, VideoPlatform::Vimeo, VideoPlatform::Gumlet];

    /// Get the display name of the platform
    pub fn name(&self) -> &'static str {
        match self {
            VideoPlatform::YouTube => "YouTube",
            VideoPlatform::Vimeo => "Vimeo",
            VideoPlatform::Gumlet => "Gumlet",
        }
    }

    /// Host markers that identify this platform
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            VideoPlatform::YouTube => &["youtube.com", "youtu.be"],
            VideoPlatform::Vimeo => &["vimeo.com"],
            VideoPlatform::Gumlet => &["gumlet.com", "gumlet.tv"],
        }
    }

    /// Prefix of the player URL. Gumlet links are embedded as-is and have none.
    pub fn embed_url_prefix(&self) -> &'static str {
        match self {
            VideoPlatform::YouTube => "https://www.youtube.com/embed/",
            VideoPlatform::Vimeo => "https://player.vimeo.com/video/",
            VideoPlatform::Gumlet => "",
        }
    }

    /// Thumbnail URL template containing a `{videoId}` placeholder
    pub fn thumbnail_template(&self) -> Option<&'static str> {
        match self {
            VideoPlatform::YouTube => {
                Some("https://img.youtube.com/vi/{videoId}/maxresdefault.jpg")
            }
            VideoPlatform::Vimeo => Some("https://vumbnail.com/{videoId}.jpg"),
            VideoPlatform::Gumlet => None,
        }
    }

    /// Build the embeddable player URL for a video ID
    pub fn embed_url(&self, video_id: &str) -> String {
        match self {
            VideoPlatform::YouTube | VideoPlatform::Vimeo => {
                format!("{}{}", self.embed_url_prefix(), video_id)
            }
            // The Gumlet "id" is the link itself
            VideoPlatform::Gumlet => video_id.to_string(),
        }
    }

    /// Build the thumbnail URL for a video ID, or an empty string if the
    /// platform has no thumbnail scheme
    pub fn thumbnail_url(&self, video_id: &str) -> String {
        self.thumbnail_template()
            .map(|template| template.replace("{videoId}", video_id))
            .unwrap_or_default()
    }

    /// Build a canonical share link for a video ID
    pub fn watch_url(&self, video_id: &str) -> String {
        match self {
            VideoPlatform::YouTube => format!("https://www.youtube.com/watch?v={}", video_id),
            VideoPlatform::Vimeo => format!("https://vimeo.com/{}", video_id),
            VideoPlatform::Gumlet => video_id.to_string(),
        }
    }
}

impl fmt::Display for VideoPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// YouTube thumbnail quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YouTubeThumbnailQuality {
    /// Default quality (120x90)
    Default,
    /// Medium quality (320x180)
    Medium,
    /// High quality (480x360)
    High,
    /// Standard definition (640x480)
    Standard,
    /// Max resolution (1280x720)
    #[default]
    MaxRes,
}

impl YouTubeThumbnailQuality {
    /// Get the filename for this quality
    pub fn filename(&self) -> &'static str {
        match self {
            YouTubeThumbnailQuality::Default => "default.jpg",
            YouTubeThumbnailQuality::Medium => "mqdefault.jpg",
            YouTubeThumbnailQuality::High => "hqdefault.jpg",
            YouTubeThumbnailQuality::Standard => "sddefault.jpg",
            YouTubeThumbnailQuality::MaxRes => "maxresdefault.jpg",
        }
    }
}

/// A video link resolved to an embeddable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedVideoUrl {
    /// Detected platform
    pub platform: VideoPlatform,
    /// Platform-specific video ID
    pub video_id: String,
    /// URL as supplied by the caller
    pub original_url: String,
    /// Player URL suitable for an iframe `src`
    pub embed_url: String,
    /// Best-effort thumbnail URL, empty when unavailable
    pub thumbnail_url: String,
    /// Start offset in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<u32>,
}

impl ParsedVideoUrl {
    /// Get the embed URL with the start offset applied, if there is one
    pub fn embed_url_at_start(&self) -> String {
        match (self.platform, self.start_time) {
            (VideoPlatform::YouTube, Some(start)) => format!("{}?start={}", self.embed_url, start),
            (VideoPlatform::Vimeo, Some(start)) => format!("{}#t={}s", self.embed_url, start),
            _ => self.embed_url.clone(),
        }
    }

    /// Get the canonical share link
    pub fn watch_url(&self) -> String {
        self.platform.watch_url(&self.video_id)
    }

    /// Get a thumbnail at a specific quality. Only YouTube offers more than one.
    pub fn thumbnail_url(&self, quality: YouTubeThumbnailQuality) -> String {
        match self.platform {
            VideoPlatform::YouTube => youtube_thumbnail(&self.video_id, quality),
            _ => self.thumbnail_url.clone(),
        }
    }
}

fn youtube_thumbnail(video_id: &str, quality: YouTubeThumbnailQuality) -> String {
    format!("https://img.youtube.com/vi/{}/{}", video_id, quality.filename())
}

/// Resolver for classifying and embedding video links
#[derive(Debug, Clone, Default)]
pub struct VideoLinkResolver {
    config: ResolverConfig,
}

impl VideoLinkResolver {
    /// Create a resolver with the given configuration
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Get the resolver configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Detect which platform a URL belongs to
    pub fn detect_platform(&self, url: &str) -> Option<VideoPlatform> {
        let platform = match self.config.host_matching {
            HostMatching::Substring => detect_by_substring(url),
            HostMatching::Host => detect_by_host(url),
        };

        if let Some(platform) = platform {
            tracing::trace!("Detected {} link", platform);
        }
        platform
    }

    /// Extract the video ID for a platform from a URL
    pub fn extract_video_id(&self, url: &str, platform: VideoPlatform) -> Option<String> {
        let url = url.trim();
        let id = match platform {
            VideoPlatform::YouTube => extract_youtube_id(url),
            VideoPlatform::Vimeo => extract_vimeo_id(url),
            // The link itself is the handle, so it has to be embeddable as-is
            VideoPlatform::Gumlet => url::Url::parse(url).ok().map(|_| url.to_string()),
        };

        id.filter(|id| !id.is_empty())
    }

    /// Resolve a URL into its embeddable form
    ///
    /// Returns `None` when the URL is not from a known platform, in which case
    /// the caller should treat it as a direct video file, or when no video ID
    /// can be found in it.
    pub fn resolve(&self, url: &str) -> Option<ParsedVideoUrl> {
        let Some(platform) = self.detect_platform(url) else {
            tracing::debug!("No video platform matched {:?}", url);
            return None;
        };

        let Some(video_id) = self.extract_video_id(url, platform) else {
            tracing::debug!("Could not extract {} video ID from {:?}", platform, url);
            return None;
        };

        let thumbnail_url = match platform {
            VideoPlatform::YouTube => {
                youtube_thumbnail(&video_id, self.config.youtube_thumbnail_quality)
            }
            _ => platform.thumbnail_url(&video_id),
        };

        let start_time = match platform {
            VideoPlatform::YouTube | VideoPlatform::Vimeo if self.config.capture_start_time => {
                extract_start_time(url)
            }
            _ => None,
        };

        Some(ParsedVideoUrl {
            platform,
            embed_url: platform.embed_url(&video_id),
            thumbnail_url,
            original_url: url.to_string(),
            video_id,
            start_time,
        })
    }
}

/// Match platform markers anywhere in the URL
fn detect_by_substring(url: &str) -> Option<VideoPlatform> {
    let normalized = url.trim().to_lowercase();

    VideoPlatform::ALL
        .into_iter()
        .find(|platform| platform.markers().iter().any(|marker| normalized.contains(*marker)))
}

/// Match platform markers against the parsed host only
fn detect_by_host(url: &str) -> Option<VideoPlatform> {
    let parsed = url::Url::parse(url.trim()).ok()?;
    let host = parsed.host_str()?.to_lowercase();

    VideoPlatform::ALL.into_iter().find(|platform| {
        platform.markers().iter().any(|marker| {
            host == *marker
                || host
                    .strip_suffix(*marker)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    })
}

/// Extract YouTube video ID from a short, watch or embed URL
fn extract_youtube_id(url: &str) -> Option<String> {
    static YOUTUBE_PATTERNS: OnceLock<[Regex; 3]> = OnceLock::new();
    let patterns = YOUTUBE_PATTERNS.get_or_init(|| {
        [
            // youtu.be/<id>
            Regex::new(r"(?i:youtu\.be)/([A-Za-z0-9_-]+)").unwrap(),
            // youtube.com/watch?...v=<id>
            Regex::new(r"(?i:youtube\.com)/watch\?(?:[^#]*?&)??v=([A-Za-z0-9_-]+)").unwrap(),
            // youtube.com/embed/<id>
            Regex::new(r"(?i:youtube\.com)/embed/([A-Za-z0-9_-]+)").unwrap(),
        ]
    });

    patterns
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract the numeric Vimeo video ID
fn extract_vimeo_id(url: &str) -> Option<String> {
    static VIMEO_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = VIMEO_REGEX.get_or_init(|| Regex::new(r"(?i:vimeo\.com)/([0-9]+)").unwrap());

    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Extract a `t=` or `start=` offset in seconds
fn extract_start_time(url: &str) -> Option<u32> {
    static START_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = START_REGEX
        .get_or_init(|| Regex::new(r"[?&#](?:t|start)=([0-9]+)s?(?:[&#]|$)").unwrap());

    re.captures(url.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}
