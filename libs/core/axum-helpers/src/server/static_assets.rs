//! Static asset serving for the client bundle.

use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_status::SetStatus;

/// Service that serves prebuilt client assets with an SPA fallback.
///
/// Any path not matched by a file under `assets_dir` is answered with the
/// client entry document, so client-side-routed paths resolve correctly on a
/// full page load. Mount it as the router's `fallback_service` so `/api/*`
/// routes keep precedence.
///
/// # Example
/// ```ignore
/// let app = Router::new()
///     .nest("/api", api_routes)
///     .fallback_service(spa_fallback_service("assets"));
/// ```
pub fn spa_fallback_service(assets_dir: impl AsRef<Path>) -> ServeDir<SetStatus<ServeFile>> {
    let index = assets_dir.as_ref().join("index.html");
    ServeDir::new(assets_dir.as_ref()).not_found_service(ServeFile::new(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, Router};
    use tower::ServiceExt;

    fn assets_fixture() -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("assets-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>entry</html>").unwrap();
        std::fs::write(dir.join("app.js"), "export {};").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_serves_existing_asset() {
        let app = Router::new().fallback_service(spa_fallback_service(assets_fixture()));

        let response = app
            .oneshot(Request::builder().uri("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unmatched_path_falls_back_to_index() {
        let app = Router::new().fallback_service(spa_fallback_service(assets_fixture()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/some/client/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"));
    }
}
