use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::project;
use super::types::*;
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

pub async fn search_movie(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<ApiResponse<Results<SearchResult>>> {
    match state.tmdb.search_movies(&params.query).await {
        Ok(list) => {
            let total = list.results.len();
            let results = project::search_results(list.results, &state.config.tmdb.image_base_url);
            debug!(query = %params.query, total, kept = results.len(), "search");
            Json(ApiResponse::Ok(Results { results }))
        }
        Err(e) => {
            debug!(query = %params.query, error = %e, "search failed");
            Json(ApiResponse::error(FETCH_DATA_ERROR))
        }
    }
}

pub async fn get_movie_details(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> Json<ApiResponse<Value>> {
    match state.tmdb.movie_details(movie_id).await {
        Ok(details) => Json(ApiResponse::Ok(details)),
        Err(e) => {
            debug!(movie_id, error = %e, "movie details failed");
            Json(ApiResponse::error(FETCH_DATA_ERROR))
        }
    }
}

pub async fn get_recommendations(
    State(state): State<AppState>,
    Path(movie_id): Path<i64>,
) -> Json<ApiResponse<Results<Recommendation>>> {
    match state.tmdb.recommendations(movie_id).await {
        Ok(list) => {
            let results = project::recommendations(
                list.results,
                &state.genres,
                &state.config.tmdb.image_base_url,
            );
            Json(ApiResponse::Ok(Results { results }))
        }
        Err(e) => {
            debug!(movie_id, error = %e, "recommendations failed");
            Json(ApiResponse::error(FETCH_RECOMMENDATIONS_ERROR))
        }
    }
}
