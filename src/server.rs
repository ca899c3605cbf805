use axum::{extract::Request, http::StatusCode, response::IntoResponse, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{Config, ConfigError};
use crate::tmdb::{GenreCache, MovieApi};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tmdb: Arc<dyn MovieApi>,
    pub genres: Arc<GenreCache>,
}

impl AppState {
    pub fn new(config: Config, tmdb: Arc<dyn MovieApi>, genres: GenreCache) -> Self {
        Self {
            config: Arc::new(config),
            tmdb,
            genres: Arc::new(genres),
        }
    }
}

pub fn build_router(state: AppState) -> Result<Router, ConfigError> {
    // Credentials rule out wildcards, so methods and headers mirror the request.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(state.config.cors.origin_headers()?))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let router = Router::new()
        .route("/search", get(crate::api::search_movie))
        .route("/search/", get(crate::api::search_movie))
        .route("/movie/:movie_id", get(crate::api::get_movie_details))
        .route(
            "/recommendations/:movie_id",
            get(crate::api::get_recommendations),
        )
        .fallback(fallback_handler)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(cors)
                .layer(axum::middleware::from_fn(crate::middleware::log_request)),
        )
        .with_state(state);

    Ok(router)
}

async fn fallback_handler(req: Request) -> impl IntoResponse {
    // Preflight requests are answered by the CORS layer before reaching here.
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
