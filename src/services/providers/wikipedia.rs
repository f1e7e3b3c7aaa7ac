/// Wikipedia category listing provider
///
/// Uses the action API's `list=categorymembers` query. One call fetches one
/// page of at most `PAGE_SIZE` members; paging is driven by the caller through
/// the `cmcontinue` token.
use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{CategoryMembersResponse, CategoryName, CategoryPage},
    services::providers::{check_status, CategoryProvider},
};

/// Largest page the API serves to anonymous clients
pub const PAGE_SIZE: u32 = 250;

#[derive(Clone)]
pub struct WikipediaProvider {
    http_client: HttpClient,
    api_url: String,
}

impl WikipediaProvider {
    pub fn new(http_client: HttpClient, api_url: String) -> Self {
        Self {
            http_client,
            api_url,
        }
    }
}

#[async_trait::async_trait]
impl CategoryProvider for WikipediaProvider {
    async fn fetch_page(
        &self,
        category: &CategoryName,
        continuation: &str,
    ) -> AppResult<CategoryPage> {
        let cmtitle = format!("Category:{}", category);
        let cmlimit = PAGE_SIZE.to_string();

        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("list", "categorymembers"),
                ("cmtitle", cmtitle.as_str()),
                ("format", "json"),
                ("cmlimit", cmlimit.as_str()),
                ("cmcontinue", continuation),
            ])
            .send()
            .await?;

        let response = check_status(self.name(), response).await?;
        let response_text = response.text().await?;

        let data: CategoryMembersResponse = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize Wikipedia response"
            );
            AppError::Json(e)
        })?;

        let page = CategoryPage::try_from(data)?;

        tracing::debug!(
            category = %category,
            members = page.members.len(),
            has_more = page.continuation.is_some(),
            provider = self.name(),
            "Category page fetched"
        );

        Ok(page)
    }

    fn name(&self) -> &'static str {
        "wikipedia"
    }
}
