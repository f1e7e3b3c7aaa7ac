use serde::Serialize;
use std::fmt;

/// Base for detail-page links, e.g. http://www.imdb.com/title/tt0093773
const IMDB_TITLE_URL: &str = "http://www.imdb.com/title/";

/// Value OMDb uses for fields it has no data for
pub(crate) const MISSING: &str = "N/A";

/// Movie details resolved from OMDb
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieMetadata {
    pub title: String,
    /// Kept as text: series report ranges such as "2010–2013"
    pub year: String,
    pub plot: String,
    pub genres: Vec<String>,
    pub imdb_id: String,
    /// IMDb rating out of 10
    pub rating: Option<f32>,
    /// Poster URL as reported, possibly the `N/A` sentinel
    pub poster: Option<String>,
}

impl MovieMetadata {
    pub fn imdb_url(&self) -> String {
        format!("{}{}", IMDB_TITLE_URL, self.imdb_id)
    }

    /// Poster URL, or an empty string when OMDb has none
    pub fn poster_url(&self) -> &str {
        match self.poster.as_deref() {
            Some(MISSING) | None => "",
            Some(url) => url,
        }
    }
}

/// Splits OMDb's "Action, Comedy, Fantasy" genre field
pub(crate) fn parse_genres(raw: Option<&str>) -> Vec<String> {
    match raw {
        None | Some(MISSING) => Vec::new(),
        Some(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

pub(crate) fn parse_rating(raw: Option<&str>) -> Option<f32> {
    raw.and_then(|r| r.trim().parse::<f32>().ok())
}

impl fmt::Display for MovieMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.title, self.year)?;
        writeln!(f, "Plot: {}", self.plot)?;
        writeln!(f, "Genre: {}", self.genres.join(", "))?;
        writeln!(f, "IMDb URL: {}", self.imdb_url())?;
        match self.rating {
            Some(rating) => write!(f, "IMDb rating: {:.1}/10", rating),
            None => write!(f, "IMDb rating: {}/10", MISSING),
        }
    }
}
