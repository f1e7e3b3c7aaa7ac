use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Wikipedia action API endpoint used for category listings
    #[serde(default = "default_wikipedia_api_url")]
    pub wikipedia_api_url: String,

    /// OMDb endpoint used for title lookups
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// OMDb API key, sent as `apikey` when set
    #[serde(default)]
    pub omdb_api_key: Option<String>,

    /// Per-request timeout applied to both external APIs
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User agent sent with every outgoing request (Wikipedia rejects anonymous clients)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Category used when the terminal picker is started without one
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Number of accepted movies that ends a picking session
    #[serde(default = "default_picks_per_session")]
    pub picks_per_session: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_wikipedia_api_url() -> String {
    "https://en.wikipedia.org/w/api.php".to_string()
}

fn default_omdb_api_url() -> String {
    "http://www.omdbapi.com/".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    concat!("movie-picker/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_category() -> String {
    "American_science_fiction_action_films".to_string()
}

fn default_picks_per_session() -> usize {
    3
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = envy::from_iter(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(config.wikipedia_api_url, "https://en.wikipedia.org/w/api.php");
        assert_eq!(config.omdb_api_url, "http://www.omdbapi.com/");
        assert_eq!(config.omdb_api_key, None);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.default_category, "American_science_fiction_action_films");
        assert_eq!(config.picks_per_session, 3);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_overrides() {
        let vars = vec![
            ("OMDB_API_KEY".to_string(), "secret".to_string()),
            ("REQUEST_TIMEOUT_SECS".to_string(), "2".to_string()),
            ("PICKS_PER_SESSION".to_string(), "5".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.omdb_api_key.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout(), Duration::from_secs(2));
        assert_eq!(config.picks_per_session, 5);
    }
}
