//! Choosing how a video link is played
//!
//! Resolved platform links are shown in an iframe player. Anything else is
//! handed to a native video element, as are Gumlet links that point straight
//! at a media file.

use crate::embeds::{ParsedVideoUrl, VideoLinkResolver, VideoPlatform};
use serde::{Deserialize, Serialize};

/// Direct video file formats playable without an iframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectVideoFormat {
    /// MPEG-4
    Mp4,
    /// WebM
    WebM,
    /// Ogg (Theora)
    Ogg,
}

impl DirectVideoFormat {
    /// Get the MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp4 => "video/mp4",
            Self::WebM => "video/webm",
            Self::Ogg => "video/ogg",
        }
    }

    /// Try to detect format from a file extension
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "mp4" => Some(Self::Mp4),
            "webm" => Some(Self::WebM),
            "ogg" | "ogv" => Some(Self::Ogg),
            _ => None,
        }
    }

    /// Try to detect format from the last path segment of a URL
    pub fn from_url(url: &str) -> Option<Self> {
        let path = url.trim().split(&['?', '#'][..]).next()?;
        let file_name = path.rsplit('/').next()?;
        let (_, extension) = file_name.rsplit_once('.')?;
        Self::from_extension(extension)
    }
}

/// How a video link should be played
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlaybackSource {
    /// Platform player in an iframe
    Embedded(ParsedVideoUrl),
    /// Native video element
    DirectFile {
        /// Media URL
        url: String,
        /// Detected format, if the extension is recognised
        #[serde(skip_serializing_if = "Option::is_none")]
        format: Option<DirectVideoFormat>,
    },
}

impl PlaybackSource {
    /// Decide how to play a link with the default resolver
    pub fn from_url(url: &str) -> Option<Self> {
        VideoLinkResolver::default().playback_source(url)
    }

    /// Check if this source needs an iframe
    pub fn is_embedded(&self) -> bool {
        matches!(self, PlaybackSource::Embedded(_))
    }

    /// Get the URL to load into the player
    pub fn src(&self) -> &str {
        match self {
            PlaybackSource::Embedded(parsed) => &parsed.embed_url,
            PlaybackSource::DirectFile { url, .. } => url,
        }
    }

    /// Get the MIME type for a `<source>` element, when known
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            PlaybackSource::Embedded(_) => None,
            PlaybackSource::DirectFile { format, .. } => format.map(|f| f.mime_type()),
        }
    }

    fn direct(url: &str) -> Self {
        PlaybackSource::DirectFile {
            url: url.to_string(),
            format: DirectVideoFormat::from_url(url),
        }
    }
}

impl VideoLinkResolver {
    /// Decide how to play a link. Returns `None` for empty input.
    pub fn playback_source(&self, url: &str) -> Option<PlaybackSource> {
        let url = url.trim();
        if url.is_empty() {
            return None;
        }

        let source = match self.resolve(url) {
            Some(parsed)
                if parsed.platform == VideoPlatform::Gumlet
                    && DirectVideoFormat::from_url(url).is_some() =>
            {
                PlaybackSource::direct(url)
            }
            Some(parsed) => PlaybackSource::Embedded(parsed),
            None => PlaybackSource::direct(url),
        };
        Some(source)
    }
}
