//! Question Results use case
//!
//! Backs the tally page: one question with the current vote count of each
//! of its choices.

use std::sync::Arc;

use pollbooth_domain::{PollRepository, QuestionId, RepositoryError};
use thiserror::Error;

use super::shared::QuestionWithChoices;

/// Errors that can occur while loading a question's results
#[derive(Error, Debug)]
pub enum QuestionResultsError {
    #[error("question {0} not found")]
    QuestionNotFound(QuestionId),

    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for QuestionResultsError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::QuestionNotFound(id) => Self::QuestionNotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Use case for showing a question's vote tallies
///
/// Reads the same records as the detail use case; the counts are whatever
/// the store holds at the moment of the read. No snapshot isolation is
/// attempted across the two reads because choices are only ever mutated by
/// single-row increments.
pub struct QuestionResultsUseCase<R: PollRepository> {
    repository: Arc<R>,
}

impl<R: PollRepository> QuestionResultsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Execute the use case
    pub async fn execute(
        &self,
        id: QuestionId,
    ) -> Result<QuestionWithChoices, QuestionResultsError> {
        let question = self.repository.get_question(id).await?;
        let choices = self.repository.choices_for(id).await?;
        Ok(QuestionWithChoices::new(question, choices))
    }
}
