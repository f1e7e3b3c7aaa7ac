use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    models::{CategoryName, CleanTitle, MovieMetadata, DEFAULT_CATEGORIES},
    services::{fetch_titles, validate_category, MoviePicker},
};

use super::AppState;

/// Upper bound on `/picks` so one request cannot walk a whole category
pub const MAX_PICKS: usize = 25;

// Request/Response types

/// Movie details plus the links derived from them
#[derive(Debug, Serialize)]
pub struct MovieResponse {
    #[serde(flatten)]
    pub movie: MovieMetadata,
    pub imdb_url: String,
    pub poster_url: String,
}

impl From<MovieMetadata> for MovieResponse {
    fn from(movie: MovieMetadata) -> Self {
        Self {
            imdb_url: movie.imdb_url(),
            poster_url: movie.poster_url().to_string(),
            movie,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryTitlesResponse {
    pub category: CategoryName,
    pub count: usize,
    pub titles: Vec<CleanTitle>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub category: CategoryName,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct RandomMovieResponse {
    pub category: CategoryName,
    pub movie: MovieResponse,
}

#[derive(Debug, Deserialize)]
pub struct PicksQuery {
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct PicksResponse {
    pub category: CategoryName,
    pub requested: usize,
    /// True when the category ran out before `requested` movies resolved
    pub exhausted: bool,
    pub movies: Vec<MovieResponse>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Lists the built-in categories
pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(DEFAULT_CATEGORIES.to_vec())
}

/// Fetches every cleaned title in a category
pub async fn category_titles(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<CategoryTitlesResponse>> {
    let category = CategoryName::new(category)?;
    let titles = fetch_titles(state.categories.as_ref(), &category).await?;

    Ok(Json(CategoryTitlesResponse {
        category,
        count: titles.len(),
        titles,
    }))
}

/// Validates a category by fetching it in full
pub async fn validate(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<ValidateResponse>> {
    let category = validate_category(state.categories.as_ref(), &category).await?;
    Ok(Json(ValidateResponse {
        category,
        valid: true,
    }))
}

/// Draws one random movie from a category
pub async fn random_from_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> AppResult<Json<MovieResponse>> {
    let category = CategoryName::new(category)?;
    let movie = draw_one(&state, &category).await?;
    Ok(Json(movie.into()))
}

/// Draws one random movie from a random built-in category
pub async fn random_movie(State(state): State<AppState>) -> AppResult<Json<RandomMovieResponse>> {
    let category = DEFAULT_CATEGORIES
        .choose(&mut rand::thread_rng())
        .copied()
        .ok_or_else(|| AppError::Internal("No default categories configured".to_string()))?;
    let category = CategoryName::new(category)?;

    let movie = draw_one(&state, &category).await?;
    Ok(Json(RandomMovieResponse {
        category,
        movie: movie.into(),
    }))
}

/// Draws and accepts up to `count` movies from a category
pub async fn picks(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(params): Query<PicksQuery>,
) -> AppResult<Json<PicksResponse>> {
    let requested = params.count.unwrap_or(state.picks_per_session);
    if requested == 0 || requested > MAX_PICKS {
        return Err(AppError::InvalidInput(format!(
            "count must be between 1 and {}",
            MAX_PICKS
        )));
    }

    let category = CategoryName::new(category)?;
    let titles = fetch_titles(state.categories.as_ref(), &category).await?;
    let mut picker = MoviePicker::new(titles, state.metadata.clone());

    let movies: Vec<MovieResponse> = picker
        .fill(requested)
        .await?
        .iter()
        .cloned()
        .map(MovieResponse::from)
        .collect();

    Ok(Json(PicksResponse {
        category,
        requested,
        exhausted: movies.len() < requested,
        movies,
    }))
}

/// Looks up a single title
pub async fn movie_details(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<MovieResponse>> {
    if title.trim().is_empty() {
        return Err(AppError::InvalidInput("Title cannot be empty".to_string()));
    }

    let movie = state.metadata.lookup(&CleanTitle::new(title)).await?;
    Ok(Json(movie.into()))
}

async fn draw_one(state: &AppState, category: &CategoryName) -> AppResult<MovieMetadata> {
    let titles = fetch_titles(state.categories.as_ref(), category).await?;
    let mut picker = MoviePicker::new(titles, state.metadata.clone());
    picker.draw_next().await
}
