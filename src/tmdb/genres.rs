use std::collections::HashMap;

use super::client::{MovieApi, UpstreamError};
use super::types::Genre;

pub const UNKNOWN_GENRE: &str = "Unknown";

/// Genre id to name lookup, filled once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct GenreCache {
    names: HashMap<i64, String>,
}

impl GenreCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_genres<I: IntoIterator<Item = Genre>>(genres: I) -> Self {
        Self {
            names: genres.into_iter().map(|g| (g.id, g.name)).collect(),
        }
    }

    /// Fetches the full genre list and replaces the mapping with it.
    /// On failure the current mapping is kept as is.
    pub async fn populate(&mut self, api: &dyn MovieApi) -> Result<usize, UpstreamError> {
        let list = api.genre_list().await?;
        *self = Self::from_genres(list.genres);
        Ok(self.names.len())
    }

    pub fn lookup(&self, id: i64) -> &str {
        self.names.get(&id).map(String::as_str).unwrap_or(UNKNOWN_GENRE)
    }

    /// Maps ids to names, keeping order and duplicates.
    pub fn names_for(&self, ids: &[i64]) -> Vec<String> {
        ids.iter().map(|id| self.lookup(*id).to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::{json, Value};

    struct StubApi(Result<Value, u16>);

    #[async_trait]
    impl MovieApi for StubApi {
        async fn get_json(&self, path: &str, _params: &[(&str, &str)]) -> Result<Value, UpstreamError> {
            assert_eq!(path, "/genre/movie/list");
            self.0.clone().map_err(UpstreamError::Status)
        }
    }

    fn genre(id: i64, name: &str) -> Genre {
        Genre { id, name: name.to_string() }
    }

    #[test]
    fn test_lookup() {
        let cache = GenreCache::from_genres(vec![genre(28, "Action"), genre(18, "Drama")]);
        assert_eq!(cache.lookup(28), "Action");
        assert_eq!(cache.lookup(18), "Drama");
        assert_eq!(cache.lookup(99), "Unknown");
        assert_eq!(GenreCache::new().lookup(28), "Unknown");
    }

    #[test]
    fn test_names_for_keeps_order_and_duplicates() {
        let cache = GenreCache::from_genres(vec![genre(28, "Action")]);
        assert_eq!(
            cache.names_for(&[28, 99, 28]),
            vec!["Action", "Unknown", "Action"]
        );
        assert!(cache.names_for(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_populate_replaces_mapping() {
        let api = StubApi(Ok(json!({
            "genres": [
                {"id": 28, "name": "Action"},
                {"id": 35, "name": "Comedy"}
            ]
        })));

        let mut cache = GenreCache::from_genres(vec![genre(1, "Stale")]);
        let count = cache.populate(&api).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(cache.lookup(35), "Comedy");
        assert_eq!(cache.lookup(1), "Unknown");
    }

    #[tokio::test]
    async fn test_populate_failure_keeps_previous() {
        let api = StubApi(Err(401));

        let mut cache = GenreCache::new();
        let err = cache.populate(&api).await.unwrap_err();
        assert!(matches!(err, UpstreamError::Status(401)));
        assert!(cache.is_empty());

        let mut cache = GenreCache::from_genres(vec![genre(28, "Action")]);
        assert!(cache.populate(&api).await.is_err());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.lookup(28), "Action");
    }
}
