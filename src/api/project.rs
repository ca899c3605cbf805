use serde_json::Number;
use std::cmp::Ordering;

use super::types::*;
use crate::tmdb::{GenreCache, Movie};

pub const MIN_VOTE_COUNT: f64 = 100.0;
pub const MIN_POPULARITY: f64 = 10.0;

pub fn poster_url(image_base_url: &str, poster_path: Option<&str>) -> Option<String> {
    match poster_path {
        Some(path) if !path.is_empty() => Some(format!("{}{}", image_base_url, path)),
        _ => None,
    }
}

/// Rounds to 2 decimals, exact halves going to the even neighbour (7.125 -> 7.12).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

fn as_f64(value: Option<&Number>) -> f64 {
    value.and_then(Number::as_f64).unwrap_or(0.0)
}

fn or_zero(value: Option<Number>) -> Number {
    value.unwrap_or_else(|| Number::from(0))
}

fn release_date(movie: &Movie) -> String {
    movie
        .release_date
        .clone()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn is_popular(movie: &Movie) -> bool {
    as_f64(movie.vote_count.as_ref()) > MIN_VOTE_COUNT
        && as_f64(movie.popularity.as_ref()) > MIN_POPULARITY
}

/// Keeps well-voted popular movies and orders them by popularity, highest first.
/// Equal popularity keeps the upstream order.
pub fn search_results(movies: Vec<Movie>, image_base_url: &str) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = movies
        .into_iter()
        .filter(is_popular)
        .map(|movie| SearchResult {
            id: movie.id,
            release_date: release_date(&movie),
            poster_url: poster_url(image_base_url, movie.poster_path.as_deref()),
            rating: match movie.vote_average {
                Some(score) => Rating::Score(score),
                None => Rating::NotAvailable(NOT_AVAILABLE),
            },
            popularity: or_zero(movie.popularity),
            vote_count: or_zero(movie.vote_count),
            title: movie.title,
            overview: movie.overview,
        })
        .collect();

    results.sort_by(|a, b| {
        as_f64(Some(&b.popularity))
            .partial_cmp(&as_f64(Some(&a.popularity)))
            .unwrap_or(Ordering::Equal)
    });
    results
}

pub fn recommendations(
    movies: Vec<Movie>,
    genres: &GenreCache,
    image_base_url: &str,
) -> Vec<Recommendation> {
    movies
        .into_iter()
        .map(|movie| Recommendation {
            release_date: release_date(&movie),
            poster_url: poster_url(image_base_url, movie.poster_path.as_deref()),
            rating: round2(as_f64(movie.vote_average.as_ref())),
            genres: genres.names_for(movie.genre_ids.as_deref().unwrap_or(&[])),
            popularity: or_zero(movie.popularity),
            vote_count: or_zero(movie.vote_count),
            title: movie.title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            overview: movie.overview.unwrap_or_else(|| NO_OVERVIEW.to_string()),
        })
        .collect()
}
