use crate::config::ServerConfig;
use crate::telemetry::Logger;
use axum::Router;
use serde_json::json;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// Serves the trunk build output; unknown paths fall back to `index.html`.
pub fn router(dist_dir: &Path) -> Router {
    let static_service =
        ServeDir::new(dist_dir).not_found_service(ServeFile::new(dist_dir.join("index.html")));

    Router::new().fallback_service(static_service)
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let logger = Logger::new(config.log_level);

    if !config.dist_dir.join("index.html").is_file() {
        logger.warn(
            "dist_missing",
            json!({
                "distDir": config.dist_dir.display().to_string(),
                "hint": "run `trunk build --release` first",
            }),
        );
    }

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    logger.info(
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "distDir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(&config.dist_dir)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn dist_fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("index.html"), "<div id=\"app\"></div>").expect("index");
        std::fs::write(dir.path().join("styles.css"), "body{}").expect("styles");
        dir
    }

    async fn get(dir: &Path, uri: &str) -> (StatusCode, String) {
        let response = router(dir)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn serves_existing_assets() {
        let dist = dist_fixture();
        let (status, body) = get(dist.path(), "/styles.css").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body{}");
    }

    #[tokio::test]
    async fn root_serves_index() {
        let dist = dist_fixture();
        let (status, body) = get(dist.path(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("id=\"app\""));
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let dist = dist_fixture();
        let (status, body) = get(dist.path(), "/projects/cod").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("id=\"app\""));
    }
}
