use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::providers::{
        build_http_client, CategoryProvider, MetadataProvider, OmdbProvider, WikipediaProvider,
    },
};

/// Shared application state
///
/// Holds only the stateless providers. Pickers are built per request, so no
/// picking flow is ever shared between callers.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryProvider>,
    pub metadata: Arc<dyn MetadataProvider>,
    /// Accepted-movie count for `/picks` when the request gives none
    pub picks_per_session: usize,
}

impl AppState {
    pub fn new(
        categories: Arc<dyn CategoryProvider>,
        metadata: Arc<dyn MetadataProvider>,
        picks_per_session: usize,
    ) -> Self {
        Self {
            categories,
            metadata,
            picks_per_session,
        }
    }

    /// Builds the Wikipedia and OMDb providers over one HTTP client
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let http_client = build_http_client(config.request_timeout(), &config.user_agent)?;

        let categories =
            WikipediaProvider::new(http_client.clone(), config.wikipedia_api_url.clone());
        let metadata = OmdbProvider::new(
            http_client,
            config.omdb_api_url.clone(),
            config.omdb_api_key.clone(),
        );

        tracing::info!(
            wikipedia_api_url = %config.wikipedia_api_url,
            omdb_api_url = %config.omdb_api_url,
            timeout_secs = config.request_timeout_secs,
            "Providers configured"
        );

        Ok(Self::new(
            Arc::new(categories),
            Arc::new(metadata),
            config.picks_per_session,
        ))
    }
}
