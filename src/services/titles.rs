use std::collections::HashSet;

use crate::models::{CleanTitle, RawMember};

/// Type suffixes removed wherever they appear in a page title
const TYPE_SUFFIXES: [&str; 3] = ["(film)", "(serial)", "(series)"];

/// Marker left by a year-qualified suffix such as "(2014 film)"
const YEAR_SUFFIX_TAIL: &str = "film)";

/// A title whose "film)" marker is not inside the first parenthetical
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unexpected title format: {0:?}")]
pub struct UnexpectedTitleFormat(pub String);

/// Strips disambiguation suffixes from a Wikipedia page title.
///
/// `"Up (film)"` becomes `"Up"` and `"Godzilla (2014 film)"` becomes
/// `"Godzilla"`. Titles without a suffix are only trimmed.
pub fn clean_title(title: &str) -> Result<CleanTitle, UnexpectedTitleFormat> {
    let mut cleaned = title.to_string();
    for suffix in TYPE_SUFFIXES {
        cleaned = cleaned.replace(suffix, "");
    }

    if cleaned.contains(YEAR_SUFFIX_TAIL) {
        // "Godzilla (2014 film)" -> ("Godzilla ", "2014 film)")
        match cleaned.split_once('(') {
            Some((head, tail)) if tail.contains(YEAR_SUFFIX_TAIL) => {
                cleaned = head.to_string();
            }
            _ => return Err(UnexpectedTitleFormat(title.to_string())),
        }
    }

    Ok(CleanTitle::new(cleaned.trim()))
}

/// Drops sub-categories and cleans the remaining member titles.
///
/// Order follows the input. A title that cleans to one already seen is kept
/// only once, as is one that cleans to nothing. Titles in an unexpected
/// format are logged and skipped.
pub fn filter_titles<'a, I>(members: I) -> Vec<CleanTitle>
where
    I: IntoIterator<Item = &'a RawMember>,
{
    let mut seen = HashSet::new();
    let mut titles = Vec::new();

    for member in members {
        if member.is_subcategory() {
            continue;
        }

        let title = match clean_title(&member.title) {
            Ok(title) => title,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping category member");
                continue;
            }
        };

        if title.as_str().is_empty() || !seen.insert(title.clone()) {
            tracing::debug!(raw = %member.title, "Dropping duplicate or empty title");
            continue;
        }

        titles.push(title);
    }

    titles
}
