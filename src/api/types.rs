use serde::Serialize;

pub const FETCH_DATA_ERROR: &str = "Failed to fetch data";
pub const FETCH_RECOMMENDATIONS_ERROR: &str = "Failed to fetch recommendations";

pub const NOT_AVAILABLE: &str = "N/A";
pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const NO_OVERVIEW: &str = "No overview available.";

/// Raw upstream rating, or "N/A" when upstream had none.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Rating {
    Score(serde_json::Number),
    NotAvailable(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub release_date: String,
    // The frontend reads the full poster URL from `poster_path`.
    #[serde(rename = "poster_path")]
    pub poster_url: Option<String>,
    pub rating: Rating,
    pub popularity: serde_json::Number,
    pub vote_count: serde_json::Number,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub overview: String,
    pub release_date: String,
    #[serde(rename = "poster_path")]
    pub poster_url: Option<String>,
    pub rating: f64,
    pub genres: Vec<String>,
    pub popularity: serde_json::Number,
    pub vote_count: serde_json::Number,
}

#[derive(Debug, Clone, Serialize)]
pub struct Results<T> {
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Body of every endpoint: either the payload or an error object.
/// Both are sent with status 200.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Ok(T),
    Error(ErrorBody),
}

impl<T> ApiResponse<T> {
    pub fn error(message: &'static str) -> Self {
        ApiResponse::Error(ErrorBody { error: message })
    }
}
