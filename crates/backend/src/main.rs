pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use shared::config::{self, ConfigSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tokio::net::TcpListener;

    let (config, source) = config::load_config()?;
    let log_file = system::tracing::initialize(&config.log_filter())?;

    match &source {
        ConfigSource::File(path) => tracing::info!("Loaded config from: {}", path.display()),
        ConfigSource::Embedded => tracing::info!("Using default embedded configuration"),
    }
    tracing::info!("Writing logs to {}", log_file.display());
    tracing::info!("Serving static files from {}", config.dist_dir().display());

    let app = routes::configure_routes(&config);
    let addr = config.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use, change [server] port in config.toml",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
