use std::sync::Arc;

use rand::{seq::SliceRandom, Rng};

use crate::{
    error::{AppError, AppResult},
    models::{CleanTitle, MovieMetadata},
    services::providers::MetadataProvider,
};

/// Random movie picker over a fixed set of titles
///
/// Titles are drawn without replacement in a uniformly random order. Titles
/// that OMDb does not know are skipped silently, since category listings only
/// approximate what the metadata database holds. Accepted movies are kept in
/// the order they were accepted.
///
/// One picker serves one picking flow. Callers running flows side by side
/// should each build their own.
pub struct MoviePicker {
    provider: Arc<dyn MetadataProvider>,
    /// Shuffled working list, consumed from the end
    titles: Vec<CleanTitle>,
    accepted: Vec<MovieMetadata>,
}

impl MoviePicker {
    /// Creates a picker over `titles` in a fresh random order
    pub fn new(titles: Vec<CleanTitle>, provider: Arc<dyn MetadataProvider>) -> Self {
        Self::with_rng(titles, provider, &mut rand::thread_rng())
    }

    /// Creates a picker whose order is drawn from `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        mut titles: Vec<CleanTitle>,
        provider: Arc<dyn MetadataProvider>,
        rng: &mut R,
    ) -> Self {
        titles.shuffle(rng);
        Self {
            provider,
            titles,
            accepted: Vec::new(),
        }
    }

    /// Number of titles not yet offered
    pub fn remaining(&self) -> usize {
        self.titles.len()
    }

    /// Draws titles until one resolves and returns its metadata.
    ///
    /// Every drawn title is removed for good, whether or not it resolved.
    /// `NotFound` lookups are skipped; any other failure is returned and the
    /// title that caused it is not retried. Fails with `Exhausted` once no
    /// titles remain.
    pub async fn draw_next(&mut self) -> AppResult<MovieMetadata> {
        while let Some(title) = self.titles.pop() {
            match self.provider.lookup(&title).await {
                Ok(movie) => return Ok(movie),
                Err(AppError::NotFound { message, .. }) => {
                    tracing::debug!(
                        title = %title,
                        error = %message,
                        remaining = self.titles.len(),
                        "Skipping unresolved title"
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::Exhausted)
    }

    /// Records a movie the caller chose to keep
    pub fn accept(&mut self, movie: MovieMetadata) {
        self.accepted.push(movie);
    }

    pub fn accepted(&self) -> &[MovieMetadata] {
        &self.accepted
    }

    /// Titles of accepted movies, in acceptance order
    pub fn accepted_titles(&self) -> Vec<String> {
        self.accepted.iter().map(|m| m.title.clone()).collect()
    }

    /// Draws and accepts movies until `count` are accepted or titles run out.
    ///
    /// Running out is not an error here; the returned slice is just shorter.
    pub async fn fill(&mut self, count: usize) -> AppResult<&[MovieMetadata]> {
        while self.accepted.len() < count {
            match self.draw_next().await {
                Ok(movie) => self.accept(movie),
                Err(AppError::Exhausted) => {
                    tracing::info!(
                        accepted = self.accepted.len(),
                        requested = count,
                        "Picker exhausted before reaching requested count"
                    );
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(&self.accepted)
    }
}
