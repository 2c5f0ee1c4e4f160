//! Video link integration tests
//!
//! End-to-end checks of the storefront video flow: an admin pastes a link,
//! the form validates it, and the product page decides how to play it.

use artisan_storefront::embeds::{
    self, HostMatching, PlaybackSource, ResolverConfig, ValidationResult, VideoLinkResolver,
    VideoPlatform,
};
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Short links embed under the canonical player URL, with or without a query
#[test]
fn test_short_links_embed() {
    init_tracing();

    for (url, id) in [
        ("https://youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://youtu.be/a_B-9?si=xyz&feature=shared", "a_B-9"),
        ("youtu.be/XYZ", "XYZ"),
    ] {
        let parsed = embeds::resolve(url).unwrap();
        assert_eq!(parsed.embed_url, format!("https://www.youtube.com/embed/{}", id));
    }
}

/// The watch ID is found regardless of parameter order
#[test]
fn test_watch_parameter_order() {
    for url in [
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ&foo=bar",
        "https://www.youtube.com/watch?foo=bar&v=dQw4w9WgXcQ",
    ] {
        let platform = embeds::detect_platform(url).unwrap();
        assert_eq!(embeds::extract_video_id(url, platform).as_deref(), Some("dQw4w9WgXcQ"));
    }
}

/// Vimeo links resolve to the numeric ID and player URL
#[test]
fn test_vimeo_links() {
    for digits in ["1", "76979871", "123456789012"] {
        let parsed = embeds::resolve(&format!("https://vimeo.com/{}", digits)).unwrap();
        assert_eq!(parsed.video_id, digits);
        assert_eq!(parsed.embed_url, format!("https://player.vimeo.com/video/{}", digits));
    }
}

/// Links without a platform marker are left for direct playback
#[test]
fn test_unknown_links() {
    init_tracing();

    for url in [
        "https://example.com/video.mp4",
        "https://cdn.shop.example/products/rug.webm",
        "ftp://files.example.org/clip.ogg",
        "",
    ] {
        assert_eq!(embeds::detect_platform(url), None);
        assert!(embeds::resolve(url).is_none());
    }
}

/// Form validation messages, in check order
#[test]
fn test_form_validation() {
    let required = ValidationResult {
        is_valid: false,
        platform: None,
        error: Some("URL is required".to_string()),
    };
    assert_eq!(embeds::validate(""), required);
    assert_eq!(embeds::validate("   "), required);

    assert_eq!(embeds::validate("not a url").error.as_deref(), Some("Invalid URL format"));
    assert_eq!(
        embeds::validate("https://example.com/video.mp4").error.as_deref(),
        Some("Unsupported video platform. Supported: YouTube, Vimeo, Gumlet")
    );
    assert_eq!(
        embeds::validate("https://www.youtube.com/watch?feature=share").error.as_deref(),
        Some("Could not extract video ID from URL")
    );
    assert_eq!(
        embeds::validate("https://youtube.com/embed/abc123"),
        ValidationResult { is_valid: true, platform: Some("YouTube".to_string()), error: None }
    );
}

/// Resolution keeps no state between calls
#[test]
fn test_resolve_is_idempotent() {
    let url = "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=30";
    assert_eq!(embeds::resolve(url), embeds::resolve(url));

    let resolver = VideoLinkResolver::default();
    assert_eq!(resolver.resolve(url), resolver.resolve(url));
}

/// The embed URL can be rebuilt from the extracted ID
#[test]
fn test_embed_url_rebuilds_from_id() {
    let parsed = embeds::resolve("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
    assert_eq!(parsed.video_id, "dQw4w9WgXcQ");
    assert_eq!(
        format!("https://www.youtube.com/embed/{}", parsed.video_id),
        parsed.embed_url
    );
    assert_eq!(VideoPlatform::YouTube.embed_url(&parsed.video_id), parsed.embed_url);
}

/// Admin pastes a link, the product page plays it
#[test]
fn test_admin_to_product_page_flow() {
    init_tracing();
    let resolver = VideoLinkResolver::default();

    let pasted = "  https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=1m  ";
    assert!(resolver.validate(pasted).is_valid);

    let parsed = resolver.check(pasted).unwrap();
    assert_eq!(
        parsed.thumbnail_url,
        "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg"
    );
    // "1m" is not a plain seconds value
    assert_eq!(parsed.start_time, None);

    let source = resolver.playback_source(pasted).unwrap();
    assert!(source.is_embedded());
    assert_eq!(source.src(), "https://www.youtube.com/embed/dQw4w9WgXcQ");

    let source = PlaybackSource::from_url("https://video.gumlet.tv/abc/main.mp4").unwrap();
    assert!(!source.is_embedded());
    assert_eq!(source.mime_type(), Some("video/mp4"));
}

/// Strict host matching loaded from the storefront settings file
#[test]
fn test_strict_config_from_file() {
    init_tracing();

    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("video_links.json");
    std::fs::write(&path, r#"{"hostMatching":"host","youtubeThumbnailQuality":"high"}"#).unwrap();

    let config = ResolverConfig::load(&path).unwrap();
    assert_eq!(config.host_matching, HostMatching::Host);
    let resolver = VideoLinkResolver::new(config);

    assert!(resolver.resolve("https://evil.example/?u=youtube.com/embed/x").is_none());

    let parsed = resolver.resolve("https://m.youtube.com/watch?v=abc").unwrap();
    assert_eq!(parsed.video_id, "abc");
    assert_eq!(parsed.thumbnail_url, "https://img.youtube.com/vi/abc/hqdefault.jpg");

    // The lenient default still accepts the embedded marker
    assert!(embeds::resolve("https://evil.example/?u=youtube.com/embed/x").is_some());
}

/// Results serialize in the shape the UI consumes
#[test]
fn test_results_serialize_for_ui() {
    let parsed = embeds::resolve("https://vimeo.com/42").unwrap();
    let value = serde_json::to_value(&parsed).unwrap();
    assert_eq!(value["platform"], "Vimeo");
    assert_eq!(value["videoId"], "42");
    assert_eq!(value["embedUrl"], "https://player.vimeo.com/video/42");
    assert_eq!(value["thumbnailUrl"], "https://vumbnail.com/42.jpg");
    assert_eq!(value["originalUrl"], "https://vimeo.com/42");

    let value = serde_json::to_value(embeds::validate("not a url")).unwrap();
    assert_eq!(value, serde_json::json!({"isValid": false, "error": "Invalid URL format"}));
}
