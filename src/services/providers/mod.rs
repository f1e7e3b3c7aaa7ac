/// External data providers
///
/// Category listings and movie metadata come from two unrelated APIs. Each sits
/// behind its own trait so the fetch and pick logic can run against any source.
use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{CategoryName, CategoryPage, CleanTitle, MovieMetadata},
};

pub mod omdb;
pub mod wikipedia;

pub use omdb::OmdbProvider;
pub use wikipedia::WikipediaProvider;

/// Source of category member listings
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CategoryProvider: Send + Sync {
    /// Fetch one page of members
    ///
    /// The first page is requested with an empty `continuation`. The returned
    /// page carries the token for the next one, or `None` on the last page.
    async fn fetch_page(&self, category: &CategoryName, continuation: &str)
        -> AppResult<CategoryPage>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Source of movie metadata
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Resolve a title to its metadata
    ///
    /// Fails with `NotFound` when the API reports an error for the title;
    /// never returns a partially populated record.
    async fn lookup(&self, title: &CleanTitle) -> AppResult<MovieMetadata>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Builds the HTTP client shared by the providers
pub fn build_http_client(timeout: Duration, user_agent: &str) -> AppResult<HttpClient> {
    HttpClient::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()
        .map_err(AppError::from)
}

/// Turns a non-success status into `ExternalApi`, keeping the body for diagnostics
pub(crate) async fn check_status(
    provider: &str,
    response: reqwest::Response,
) -> AppResult<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(AppError::ExternalApi(format!(
        "{} API returned status {}: {}",
        provider, status, body
    )))
}
