pub mod api;
pub mod config;
pub mod middleware;
pub mod server;
pub mod tmdb;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use crate::tmdb::{GenreCache, MovieApi, TmdbClient};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Upstream client error: {0}")]
    Upstream(#[from] tmdb::UpstreamError),
    #[error("Server error: {0}")]
    Server(String),
}

/// Fills the genre cache before any request is served. A failed fetch is
/// reported and leaves the cache empty, so genres resolve to "Unknown".
pub async fn load_genres(api: &dyn MovieApi) -> GenreCache {
    let mut genres = GenreCache::new();
    match genres.populate(api).await {
        Ok(count) => info!("Loaded {} genres", count),
        Err(e) => warn!("Failed to load genre list, genre names will be unknown: {}", e),
    }
    genres
}

pub async fn run(config_path: Option<&str>, debug_logs: bool) -> Result<(), ServerError> {
    let mut config = config::Config::load(config_path)?;
    config.debug_logs = debug_logs;

    match config_path {
        Some(path) => info!("Using config file: {}", path),
        None => info!("No config file given, using defaults"),
    }
    if debug_logs {
        info!("Debug logging enabled");
    }
    if config.tmdb.api_key.is_empty() {
        warn!("{} is not set, upstream requests will fail", config::API_KEY_ENV);
    }

    let tmdb: Arc<dyn MovieApi> = Arc::new(TmdbClient::new(&config.tmdb)?);

    info!("Fetching genre list from {}", config.tmdb.base_url);
    let genres = load_genres(tmdb.as_ref()).await;

    let addr: SocketAddr = format!("{}:{}", config.listen.address, config.listen.port)
        .parse()
        .map_err(|e| ServerError::Server(format!("Invalid address: {}", e)))?;

    let tls_paths = match (&config.listen.tlscert, &config.listen.tlskey) {
        (Some(cert), Some(key)) => Some((cert.clone(), key.clone())),
        _ => None,
    };

    let state = server::AppState::new(config, tmdb, genres);
    let app = server::build_router(state)?;

    if let Some((cert_path, key_path)) = tls_paths {
        info!("Loading TLS certificate from {}", cert_path);
        info!("Loading TLS key from {}", key_path);

        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(&cert_path, &key_path)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to load TLS config: {}", e)))?;

        info!("Serving HTTPS on {}", addr);

        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    } else {
        info!("Serving HTTP on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Server(format!("Failed to bind: {}", e)))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Server(format!("Server error: {}", e)))?;
    }

    Ok(())
}
