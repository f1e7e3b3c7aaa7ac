/// OMDb title lookup provider
///
/// Resolves a title through OMDb's `t=` search with a short plot and the
/// extended (`tomatoes`) rating block. OMDb answers unknown titles with HTTP 200
/// and an `Error` field, which is surfaced here as `NotFound`.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{CleanTitle, MovieMetadata, OmdbResponse},
    services::providers::{check_status, MetadataProvider},
};

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
}

impl OmdbProvider {
    pub fn new(http_client: HttpClient, api_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client,
            api_url,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl MetadataProvider for OmdbProvider {
    async fn lookup(&self, title: &CleanTitle) -> AppResult<MovieMetadata> {
        let mut params = vec![
            ("t", title.as_str()),
            ("y", ""),
            ("plot", "short"),
            ("r", "json"),
            ("tomatoes", "true"),
        ];
        if let Some(api_key) = self.api_key.as_deref() {
            params.push(("apikey", api_key));
        }

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&params)
            .send()
            .await?;

        let response = check_status(self.name(), response).await?;
        let data: OmdbResponse = response.json().await?;

        if let Some(message) = data.error_message() {
            tracing::debug!(title = %title, error = %message, "OMDb lookup missed");
            return Err(AppError::NotFound {
                title: title.to_string(),
                message: message.to_string(),
            });
        }

        // Records without an identifier cannot be linked or told apart
        if data.title.is_none() || data.imdb_id.is_none() {
            tracing::debug!(title = %title, "OMDb returned an incomplete record");
            return Err(AppError::NotFound {
                title: title.to_string(),
                message: "incomplete record: missing Title or imdbID".to_string(),
            });
        }

        let movie = MovieMetadata::try_from(data)?;

        tracing::info!(
            title = %title,
            imdb_id = %movie.imdb_id,
            provider = self.name(),
            "Movie metadata fetched"
        );

        Ok(movie)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_provider(server: &MockServer, api_key: Option<&str>) -> OmdbProvider {
        OmdbProvider::new(
            HttpClient::new(),
            format!("{}/", server.uri()),
            api_key.map(str::to_string),
        )
    }

    #[tokio::test]
    async fn test_lookup_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("t", "Mystery Men"))
            .and(query_param("y", ""))
            .and(query_param("plot", "short"))
            .and(query_param("r", "json"))
            .and(query_param("tomatoes", "true"))
            .and(query_param_is_missing("apikey"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Title": "Mystery Men",
                "Year": "1999",
                "Plot": "A group of inept amateur superheroes must try to save the day.",
                "Genre": "Action, Comedy, Fantasy",
                "imdbID": "tt0132347",
                "imdbRating": "6.0",
                "Poster": "https://img.example/mystery-men.jpg",
                "Response": "True"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = create_test_provider(&server, None);
        let movie = provider.lookup(&CleanTitle::new("Mystery Men")).await.unwrap();

        assert_eq!(movie.title, "Mystery Men");
        assert_eq!(movie.genres.len(), 3);
        assert_eq!(movie.rating, Some(6.0));
        assert_eq!(movie.imdb_url(), "http://www.imdb.com/title/tt0132347");
        assert_eq!(movie.poster_url(), "https://img.example/mystery-men.jpg");
    }

    #[tokio::test]
    async fn test_lookup_error_field_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Response": "False",
                "Error": "Movie not found!"
            })))
            .mount(&server)
            .await;

        let provider = create_test_provider(&server, None);
        let err = provider
            .lookup(&CleanTitle::new("Le schpountz"))
            .await
            .unwrap_err();

        match err {
            AppError::NotFound { title, message } => {
                assert_eq!(title, "Le schpountz");
                assert_eq!(message, "Movie not found!");
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lookup_incomplete_record_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Title": "Le schpountz",
                "Year": "1999",
                "Response": "True"
            })))
            .mount(&server)
            .await;

        let provider = create_test_provider(&server, None);
        let err = provider
            .lookup(&CleanTitle::new("Le schpountz"))
            .await
            .unwrap_err();

        assert!(err.is_domain());
        match err {
            AppError::NotFound { title, message } => {
                assert_eq!(title, "Le schpountz");
                assert!(message.contains("imdbID"));
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lookup_encodes_non_ascii_title() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("t", "Amélie"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Title": "Amélie",
                "Year": "2001",
                "imdbID": "tt0211915",
                "Response": "True"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = create_test_provider(&server, None);
        let movie = provider.lookup(&CleanTitle::new("Amélie")).await.unwrap();
        assert_eq!(movie.title, "Amélie");
        assert_eq!(movie.rating, None);
    }

    #[tokio::test]
    async fn test_lookup_sends_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("apikey", "secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Title": "Up",
                "imdbID": "tt1049413",
                "Response": "True"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let provider = create_test_provider(&server, Some("secret"));
        assert!(provider.lookup(&CleanTitle::new("Up")).await.is_ok());
    }

    #[tokio::test]
    async fn test_lookup_unauthorized_is_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "Response": "False",
                "Error": "No API key provided."
            })))
            .mount(&server)
            .await;

        let provider = create_test_provider(&server, None);
        let err = provider.lookup(&CleanTitle::new("Up")).await.unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(_)));
        assert!(!err.is_domain());
    }
}
