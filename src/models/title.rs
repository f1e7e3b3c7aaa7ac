use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AppError, AppResult, InvalidCategoryReason};

/// Name of a Wikipedia category, without the `Category:` prefix
///
/// Passed to the listing API verbatim, so case and underscores matter
/// (`American_drama_films` and `american drama films` are different names).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CategoryName(String);

impl CategoryName {
    /// Fails with `InvalidCategory(blank)` when the name is empty or whitespace
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::invalid_category(name, InvalidCategoryReason::Blank));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A page title exactly as the listing API returned it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawMember {
    pub title: String,
}

impl RawMember {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Sub-category entries are listed alongside pages
    pub fn is_subcategory(&self) -> bool {
        self.title.contains("Category:")
    }
}

/// A film title with its disambiguation suffix removed
///
/// This is the unit of identity for picking and metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CleanTitle(String);

impl CleanTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CleanTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of category members plus the token for the next page, if any
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryPage {
    pub members: Vec<RawMember>,
    pub continuation: Option<String>,
}
