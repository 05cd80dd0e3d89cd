//! List Questions use case
//!
//! Backs the index page: the most recently published questions, newest
//! first.

use std::sync::Arc;

use pollbooth_domain::{PollRepository, Question, RepositoryError};
use thiserror::Error;
use tracing::debug;

/// How many questions the index page shows
pub const LATEST_QUESTION_LIMIT: u32 = 5;

/// Errors that can occur while listing questions
#[derive(Error, Debug)]
pub enum ListQuestionsError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case for listing the latest questions
pub struct ListQuestionsUseCase<R: PollRepository> {
    repository: Arc<R>,
}

impl<R: PollRepository> ListQuestionsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Execute the use case
    ///
    /// Returns at most [`LATEST_QUESTION_LIMIT`] questions ordered by
    /// publication timestamp descending. An empty store yields an empty
    /// list, not an error.
    pub async fn execute(&self) -> Result<Vec<Question>, ListQuestionsError> {
        let questions = self.repository.list_recent(LATEST_QUESTION_LIMIT).await?;
        debug!("Listed {} latest questions", questions.len());
        Ok(questions)
    }
}
