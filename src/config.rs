use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

pub const API_KEY_ENV: &str = "TMDB_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub listen: ListenConfig,
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(skip)]
    pub debug_logs: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListenConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default)]
    pub tlscert: Option<String>,
    #[serde(default)]
    pub tlskey: Option<String>,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            tlscert: None,
            tlskey: None,
        }
    }
}

#[derive(Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Keep the key out of log output.
impl std::fmt::Debug for TmdbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbConfig")
            .field("api_key", &if self.api_key.is_empty() { "" } else { "***" })
            .field("base_url", &self.base_url)
            .field("image_base_url", &self.image_base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    #[serde(alias = "allowedorigins", default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl CorsConfig {
    pub fn origin_headers(&self) -> Result<Vec<HeaderValue>, ConfigError> {
        self.allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim_end_matches('/'))
                    .map_err(|_| ConfigError::InvalidOrigin(origin.clone()))
            })
            .collect()
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> String {
    "8000".to_string()
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_string(), e))?;

        Self::from_yaml(path, &content)
    }

    pub fn from_yaml(path: &str, content: &str) -> Result<Self, ConfigError> {
        // An empty file is a valid, all-defaults config.
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConfigError::ParseError(path.to_string(), e))
    }

    /// Loads the optional config file, then lets the environment override the API key.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Config::default(),
        };
        config.apply_env(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    pub fn apply_env(&mut self, api_key: Option<String>) {
        if let Some(key) = api_key {
            self.tmdb.api_key = key;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(String, serde_yaml::Error),
    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.listen.address, "127.0.0.1");
        assert_eq!(config.listen.port, "8000");
        assert_eq!(config.tmdb.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.tmdb.image_base_url, "https://image.tmdb.org/t/p/w500");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert!(config.listen.tlscert.is_none());
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = "\
listen:
  port: \"9000\"
tmdb:
  api_key: from-file
cors:
  allowed_origins:
    - https://movies.example.com
";

        let config = Config::from_yaml("test.yaml", yaml).unwrap();
        assert_eq!(config.listen.address, "127.0.0.1");
        assert_eq!(config.listen.port, "9000");
        assert_eq!(config.tmdb.api_key, "from-file");
        assert_eq!(config.tmdb.timeout_secs, 30);
        assert_eq!(config.cors.allowed_origins, vec!["https://movies.example.com"]);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = Config::from_yaml("empty.yaml", "   \n").unwrap();
        assert_eq!(config.listen.port, "8000");
    }

    #[test]
    fn test_env_overrides_api_key() {
        let mut config = Config::from_yaml("test.yaml", "tmdb:\n  api_key: from-file\n").unwrap();
        config.apply_env(None);
        assert_eq!(config.tmdb.api_key, "from-file");
        config.apply_env(Some("from-env".to_string()));
        assert_eq!(config.tmdb.api_key, "from-env");
    }

    #[test]
    fn test_debug_hides_api_key() {
        let mut config = Config::default();
        config.apply_env(Some("secret-key".to_string()));
        let printed = format!("{:?}", config);
        assert!(!printed.contains("secret-key"));
    }

    #[test]
    fn test_origin_headers() {
        let cors = CorsConfig {
            allowed_origins: vec!["http://localhost:3000/".to_string()],
        };
        let origins = cors.origin_headers().unwrap();
        assert_eq!(origins, vec![HeaderValue::from_static("http://localhost:3000")]);

        let bad = CorsConfig {
            allowed_origins: vec!["bad\norigin".to_string()],
        };
        assert!(matches!(bad.origin_headers(), Err(ConfigError::InvalidOrigin(_))));
    }
}
