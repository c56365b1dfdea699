use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};

#[derive(Clone)]
pub struct SiteState {
    index_path: Arc<PathBuf>,
}

impl SiteState {
    pub fn new(index_path: PathBuf) -> Self {
        Self {
            index_path: Arc::new(index_path),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("asset not found: {0}")]
    AssetNotFound(String),
    #[error("index file unavailable: {0}")]
    IndexUnavailable(#[from] std::io::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        match self {
            SiteError::AssetNotFound(_) => StatusCode::NOT_FOUND.into_response(),
            SiteError::IndexUnavailable(ref e) => {
                tracing::error!("{}", e);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Site bundle is not built yet. Run `trunk build` in crates/frontend.",
                )
                    .into_response()
            }
        }
    }
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// Everything ServeDir did not find.
///
/// Client-side routes (`/dashboard`, `/chat`, `/sign-in`, ...) get the app
/// shell so deep links and reloads work; a missing file with an extension
/// stays a 404.
pub async fn spa_fallback(
    State(state): State<SiteState>,
    uri: Uri,
) -> Result<Html<String>, SiteError> {
    let path = uri.path();
    if is_asset_path(path) {
        return Err(SiteError::AssetNotFound(path.to_owned()));
    }

    let html = tokio::fs::read_to_string(state.index_path.as_ref()).await?;
    Ok(Html(html))
}

/// Last path segment looks like `name.ext`
pub fn is_asset_path(path: &str) -> bool {
    let last = path.rsplit('/').next().unwrap_or_default();
    match last.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && !ext.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_index(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "legal-brief-{}-{}.html",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_is_asset_path() {
        assert!(is_asset_path("/frontend-3f2a.wasm"));
        assert!(is_asset_path("/styles/legal.css"));
        assert!(is_asset_path("/public/logo.svg"));

        assert!(!is_asset_path("/"));
        assert!(!is_asset_path("/dashboard"));
        assert!(!is_asset_path("/sign-in"));
        assert!(!is_asset_path("/chat/"));
        assert!(!is_asset_path("/.hidden"));
        assert!(!is_asset_path("/trailing."));
    }

    #[tokio::test]
    async fn test_deep_link_gets_index() {
        let index = temp_index("deep-link", "<html>shell</html>");
        let state = SiteState::new(index.clone());

        let Html(body) = spa_fallback(State(state), Uri::from_static("/upload"))
            .await
            .unwrap();
        assert_eq!(body, "<html>shell</html>");

        let _ = std::fs::remove_file(index);
    }

    #[tokio::test]
    async fn test_missing_asset_is_404() {
        let index = temp_index("asset", "<html></html>");
        let state = SiteState::new(index.clone());

        let err = spa_fallback(State(state), Uri::from_static("/missing.js"))
            .await
            .unwrap_err();
        assert!(matches!(err, SiteError::AssetNotFound(ref p) if p == "/missing.js"));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let _ = std::fs::remove_file(index);
    }

    #[tokio::test]
    async fn test_unbuilt_bundle_is_503() {
        let state = SiteState::new(std::env::temp_dir().join("legal-brief-no-such-index.html"));

        let err = spa_fallback(State(state), Uri::from_static("/chat"))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(health().await, "ok");
    }
}
