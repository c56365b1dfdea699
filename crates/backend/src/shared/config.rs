use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StaticFilesConfig {
    pub dist_dir: String,
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".into(),
        }
    }
}

fn default_index_file() -> String {
    "index.html".into()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000

[static_files]
dist_dir = "dist"
index_file = "index.html"

[logging]
filter = "info,tower_http=warn"
"#;

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Embedded,
}

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable
/// 2. Embedded default
///
/// Tracing is not initialised yet at this point (the filter lives in the
/// config), so the caller logs the returned source.
pub fn load_config() -> anyhow::Result<(Config, ConfigSource)> {
    if let Some(exe_dir) = exe_dir() {
        let config_path = exe_dir.join("config.toml");
        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config = parse(&contents)
                .map_err(|e| anyhow::anyhow!("{}: {}", config_path.display(), e))?;
            return Ok((config, ConfigSource::File(config_path)));
        }
    }

    Ok((parse(DEFAULT_CONFIG)?, ConfigSource::Embedded))
}

pub fn parse(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if config.static_files.index_file.trim().is_empty() {
        anyhow::bail!("static_files.index_file must not be empty");
    }
    Ok(config)
}

impl Config {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid server address {}: {}", addr, e))
    }

    /// Log filter, `RUST_LOG` wins over the configured one
    pub fn log_filter(&self) -> String {
        pick_filter(std::env::var("RUST_LOG").ok(), &self.logging.filter)
    }

    pub fn dist_dir(&self) -> PathBuf {
        resolve_path(
            &self.static_files.dist_dir,
            std::env::current_dir().ok().as_deref(),
            exe_dir().as_deref(),
        )
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir().join(&self.static_files.index_file)
    }
}

fn pick_filter(env: Option<String>, configured: &str) -> String {
    env.filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| configured.to_string())
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
}

/// Resolves a configured directory.
///
/// Absolute paths are used as is. Relative ones are tried against the
/// working directory first (`cargo run` from the workspace root), then
/// against the executable directory (deployed layout).
fn resolve_path(configured: &str, cwd: Option<&Path>, exe_dir: Option<&Path>) -> PathBuf {
    let path = Path::new(configured);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Some(candidate) = cwd.map(|d| d.join(path)) {
        if candidate.exists() {
            return candidate;
        }
    }

    match exe_dir {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.static_files.dist_dir, "dist");
        assert_eq!(config.static_files.index_file, "index.html");
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_optional_sections_fall_back() {
        let config = parse(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8081

            [static_files]
            dist_dir = "/srv/site"
            "#,
        )
        .unwrap();
        assert_eq!(config.static_files.index_file, "index.html");
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.index_path(), PathBuf::from("/srv/site/index.html"));
    }

    #[test]
    fn test_rejects_bad_config() {
        assert!(parse("[server]\nhost = \"0.0.0.0\"").is_err());
        assert!(parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 3000
            [static_files]
            dist_dir = "dist"
            index_file = " "
            "#
        )
        .is_err());
    }

    #[test]
    fn test_invalid_host() {
        let mut config = parse(DEFAULT_CONFIG).unwrap();
        config.server.host = "not a host".into();
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_env_filter_overrides_config() {
        assert_eq!(pick_filter(Some("debug".into()), "info"), "debug");
        assert_eq!(pick_filter(Some("  ".into()), "info"), "info");
        assert_eq!(pick_filter(None, "info,tower_http=warn"), "info,tower_http=warn");
    }

    #[test]
    fn test_resolve_path() {
        let exe = Path::new("/opt/legal/bin");
        assert_eq!(
            resolve_path("/var/www", None, Some(exe)),
            PathBuf::from("/var/www")
        );
        // несуществующий каталог относительно cwd -> рядом с exe
        assert_eq!(
            resolve_path(
                "dist-that-does-not-exist",
                Some(Path::new("/nonexistent")),
                Some(exe)
            ),
            exe.join("dist-that-does-not-exist")
        );
        assert_eq!(
            resolve_path("dist", None, None),
            PathBuf::from("dist")
        );

        let cwd = std::env::temp_dir();
        assert_eq!(resolve_path(".", Some(&cwd), Some(exe)), cwd.join("."));
    }
}
