use serde::{Deserialize, Serialize};

/// A movie entry as returned in TMDB list responses (search, recommendations).
///
/// Every field is optional; upstream entries are frequently sparse and a
/// missing field must never fail the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Movie {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub vote_average: Option<serde_json::Number>,
    #[serde(default)]
    pub vote_count: Option<serde_json::Number>,
    #[serde(default)]
    pub popularity: Option<serde_json::Number>,
    #[serde(default)]
    pub genre_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieList {
    #[serde(default)]
    pub results: Vec<Movie>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}
