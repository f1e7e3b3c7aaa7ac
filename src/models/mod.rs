use serde::Deserialize;

use crate::error::{AppError, AppResult};

pub mod movie;
pub mod title;

pub use movie::MovieMetadata;
pub use title::{CategoryName, CategoryPage, CleanTitle, RawMember};

/// Categories offered when the caller has not chosen one
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "American_action_thriller_films",
    "American_biographical_films",
    "American_crime_drama_films",
    "American_drama_films",
    "American_epic_films",
    "American_romantic_comedy_films",
    "American_satirical_films",
    "American_science_fiction_films",
];

// ============================================================================
// Wikipedia categorymembers API Types
// ============================================================================

/// Raw response from `action=query&list=categorymembers`
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMembersResponse {
    #[serde(default)]
    pub query: Option<CategoryMembersQuery>,
    #[serde(default, rename = "continue")]
    pub continuation: Option<CategoryContinue>,
    #[serde(default)]
    pub error: Option<WikiApiError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMembersQuery {
    #[serde(default)]
    pub categorymembers: Vec<RawMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryContinue {
    #[serde(default)]
    pub cmcontinue: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WikiApiError {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

impl TryFrom<CategoryMembersResponse> for CategoryPage {
    type Error = AppError;

    fn try_from(response: CategoryMembersResponse) -> AppResult<Self> {
        if let Some(error) = response.error {
            return Err(AppError::ExternalApi(format!(
                "Wikipedia API returned {}: {}",
                error.code, error.info
            )));
        }

        let query = response.query.ok_or_else(|| {
            AppError::ExternalApi("Wikipedia response missing query block".to_string())
        })?;

        Ok(CategoryPage {
            members: query.categorymembers,
            continuation: response.continuation.and_then(|c| c.cmcontinue),
        })
    }
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw response from OMDb's title lookup
///
/// Every field is optional: a failed lookup carries only `Response` and `Error`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbResponse {
    pub title: Option<String>,
    pub year: Option<String>,
    pub plot: Option<String>,
    pub genre: Option<String>,
    pub poster: Option<String>,
    #[serde(rename = "imdbID")]
    pub imdb_id: Option<String>,
    #[serde(rename = "imdbRating")]
    pub imdb_rating: Option<String>,
    pub error: Option<String>,
}

impl OmdbResponse {
    /// The API's error message, if it reported one
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

impl TryFrom<OmdbResponse> for MovieMetadata {
    type Error = AppError;

    fn try_from(data: OmdbResponse) -> AppResult<Self> {
        if let Some(message) = data.error_message() {
            return Err(AppError::ExternalApi(format!(
                "Cannot build movie from OMDb error response: {}",
                message
            )));
        }

        let title = data
            .title
            .ok_or_else(|| AppError::ExternalApi("OMDb response missing Title".to_string()))?;
        let imdb_id = data
            .imdb_id
            .ok_or_else(|| AppError::ExternalApi("OMDb response missing imdbID".to_string()))?;

        Ok(MovieMetadata {
            title,
            year: data.year.unwrap_or_default(),
            plot: data.plot.unwrap_or_default(),
            genres: movie::parse_genres(data.genre.as_deref()),
            imdb_id,
            rating: movie::parse_rating(data.imdb_rating.as_deref()),
            poster: data.poster,
        })
    }
}
