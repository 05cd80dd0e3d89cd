//! Question Detail use case
//!
//! Backs the voting form: one question with its choices.

use std::sync::Arc;

use pollbooth_domain::{PollRepository, QuestionId, RepositoryError};
use thiserror::Error;

use super::shared::QuestionWithChoices;

/// Errors that can occur while loading a question's detail view
#[derive(Error, Debug)]
pub enum QuestionDetailError {
    #[error("question {0} not found")]
    QuestionNotFound(QuestionId),

    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for QuestionDetailError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::QuestionNotFound(id) => Self::QuestionNotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Use case for showing a question and its choices
pub struct QuestionDetailUseCase<R: PollRepository> {
    repository: Arc<R>,
}

impl<R: PollRepository> QuestionDetailUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Execute the use case
    ///
    /// A missing question surfaces as
    /// [`QuestionDetailError::QuestionNotFound`], never as a partial
    /// result; a question without choices is returned with an empty list.
    pub async fn execute(
        &self,
        id: QuestionId,
    ) -> Result<QuestionWithChoices, QuestionDetailError> {
        let question = self.repository.get_question(id).await?;
        let choices = self.repository.choices_for(id).await?;
        Ok(QuestionWithChoices::new(question, choices))
    }
}
