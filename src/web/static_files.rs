//! Embedded asset serving for the web host.
//!
//! The stylesheet and the page script are compiled into the binary from the
//! crate's `assets/` directory and served under `/assets/`.

use axum::{
    body::Body,
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

/// Files embedded from `assets/`.
#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
#[include = "*.js"]
#[include = "*.svg"]
#[include = "*.ico"]
pub struct StaticAssets;

/// GET /assets/{*path} - Serves one embedded asset or 404.
pub async fn serve_asset(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');
    if path.contains("..") {
        return (StatusCode::BAD_REQUEST, "Invalid asset path").into_response();
    }

    match StaticAssets::get(path) {
        Some(content) => file_response(path, content.data.as_ref()),
        None => (StatusCode::NOT_FOUND, "File not found").into_response(),
    }
}

/// Creates an HTTP response for a file with appropriate content type.
fn file_response(path: &str, content: &[u8]) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime.as_ref())
        .header(header::CACHE_CONTROL, cache_control_for_path(path))
        .body(Body::from(content.to_vec()))
        .unwrap_or_else(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create response",
            )
                .into_response()
        })
}

/// Returns the Cache-Control header for an asset.
///
/// - Scripts: no cache (always revalidate)
/// - Other files: short cache (1 hour)
fn cache_control_for_path(path: &str) -> &'static str {
    if std::path::Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("js"))
    {
        "no-cache, must-revalidate"
    } else {
        "public, max-age=3600"
    }
}

/// Lists all embedded asset paths.
#[must_use]
pub fn list_embedded_assets() -> Vec<String> {
    StaticAssets::iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_for_path() {
        assert_eq!(cache_control_for_path("page.js"), "no-cache, must-revalidate");
        assert_eq!(cache_control_for_path("styles.css"), "public, max-age=3600");
    }

    #[test]
    fn test_page_assets_are_embedded() {
        let assets = list_embedded_assets();
        assert!(assets.iter().any(|a| a == "styles.css"));
        assert!(assets.iter().any(|a| a == "page.js"));
    }

    #[test]
    fn test_page_script_tracks_sections_locally() {
        let script = StaticAssets::get("page.js").unwrap();
        let source = std::str::from_utf8(&script.data).unwrap();
        assert!(source.contains("dataset.rootMargin"));
        assert!(source.contains("dataset.thresholds"));
        assert!(!source.contains("fetch("));
    }
}
