use axum::{
    middleware,
    routing::{get, MethodRouter},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::site::{self, SiteState};
use crate::shared::config::Config;
use crate::system;

/// Конфигурация всех роутов приложения
pub fn configure_routes(config: &Config) -> Router {
    let dist_dir = config.dist_dir();
    if !dist_dir.exists() {
        tracing::warn!(
            "dist directory {} not found, run `trunk build` in crates/frontend",
            dist_dir.display()
        );
    }

    let spa: MethodRouter =
        get(site::spa_fallback).with_state(SiteState::new(config.index_path()));

    Router::new()
        .route("/health", get(site::health))
        .fallback_service(ServeDir::new(dist_dir).fallback(spa))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn temp_dist(name: &str) -> PathBuf {
        let dist = std::env::temp_dir().join(format!("legal-brief-dist-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(dist.join("public")).unwrap();
        std::fs::write(dist.join("index.html"), "<html>shell</html>").unwrap();
        std::fs::write(dist.join("public").join("logo.svg"), "<svg></svg>").unwrap();
        dist
    }

    fn config_for(dist: &std::path::Path) -> Config {
        let toml = format!(
            "[server]\nhost = \"127.0.0.1\"\nport = 0\n\n[static_files]\ndist_dir = {:?}\nindex_file = \"index.html\"\n",
            dist.display().to_string()
        );
        crate::shared::config::parse(&toml).unwrap()
    }

    async fn get(addr: std::net::SocketAddr, path: &str) -> (u16, String) {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!("GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n", path);
        stream.write_all(request.as_bytes()).await.unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        let status = raw.split_whitespace().nth(1).unwrap().parse().unwrap();
        let body = raw.split_once("\r\n\r\n").map(|(_, b)| b.to_owned()).unwrap_or_default();
        (status, body)
    }

    #[tokio::test]
    async fn test_logo_is_served_under_public() {
        let dist = temp_dist("logo");
        let app = configure_routes(&config_for(&dist));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let (status, body) = get(addr, "/public/logo.svg").await;
        assert_eq!(status, 200);
        assert_eq!(body, "<svg></svg>");

        // copy-dir не кладёт файлы в корень dist
        let (status, _) = get(addr, "/logo.svg").await;
        assert_eq!(status, 404);

        let (status, body) = get(addr, "/chat").await;
        assert_eq!(status, 200);
        assert_eq!(body, "<html>shell</html>");

        let (status, body) = get(addr, "/health").await;
        assert_eq!((status, body.as_str()), (200, "ok"));

        let _ = std::fs::remove_dir_all(dist);
    }
}
