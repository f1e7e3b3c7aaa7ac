use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Why a category name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCategoryReason {
    /// The name was empty
    Blank,
    /// The listing API returned no usable titles for it
    Empty,
}

impl fmt::Display for InvalidCategoryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidCategoryReason::Blank => write!(f, "blank"),
            InvalidCategoryReason::Empty => write!(f, "empty"),
        }
    }
}

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("External API error: {0}")]
    ExternalApi(String),

    #[error("Invalid category {category:?}: {reason}")]
    InvalidCategory {
        category: String,
        reason: InvalidCategoryReason,
    },

    #[error("OMDb API returned {message:?} when looking up {title:?}")]
    NotFound { title: String, message: String },

    #[error("No remaining titles could be resolved")]
    Exhausted,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_category(category: impl Into<String>, reason: InvalidCategoryReason) -> Self {
        AppError::InvalidCategory {
            category: category.into(),
            reason,
        }
    }

    /// True for failures a caller is expected to handle (bad category, unknown
    /// title, drained picker). Transport and parse failures return false.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCategory { .. } | AppError::NotFound { .. } | AppError::Exhausted
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidCategory { .. } | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } | AppError::Exhausted => StatusCode::NOT_FOUND,
            AppError::HttpClient(_) | AppError::Json(_) | AppError::ExternalApi(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
