//! Poll repository trait
//!
//! This is a domain-level abstraction over the transactional store that
//! holds questions and choices. Implementations live in the infrastructure
//! layer.

use async_trait::async_trait;
use thiserror::Error;

use super::entities::{Choice, Question};
use super::value_objects::{ChoiceId, QuestionId};

/// Errors surfaced by repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("question {0} not found")]
    QuestionNotFound(QuestionId),

    #[error("choice {choice} not found for question {question}")]
    ChoiceNotFound {
        question: QuestionId,
        choice: ChoiceId,
    },

    #[error("storage backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RepositoryError {
    /// Wrap an arbitrary store fault
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Box::new(err))
    }

    /// Check whether this error is a missing-record condition
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::QuestionNotFound(_) | RepositoryError::ChoiceNotFound { .. }
        )
    }
}

/// Repository contract for poll records
///
/// All state lives behind this trait; the operations above it are stateless
/// per request. The store must serialize each single-row counter increment
/// atomically so that concurrent voters cannot lose updates.
#[async_trait]
pub trait PollRepository: Send + Sync {
    /// The `limit` most recently published questions, newest first
    ///
    /// Returns fewer than `limit` if fewer exist; an empty list is valid.
    async fn list_recent(&self, limit: u32) -> Result<Vec<Question>, RepositoryError>;

    /// Look up a single question
    async fn get_question(&self, id: QuestionId) -> Result<Question, RepositoryError>;

    /// All choices belonging to a question, in insertion order
    ///
    /// Fails with [`RepositoryError::QuestionNotFound`] if the question
    /// itself does not exist, so callers cannot mistake an absent question
    /// for one without choices.
    async fn choices_for(&self, question: QuestionId) -> Result<Vec<Choice>, RepositoryError>;

    /// Look up one choice of a question
    ///
    /// Fails with [`RepositoryError::ChoiceNotFound`] when the choice does
    /// not exist or belongs to a different question.
    async fn get_choice(
        &self,
        question: QuestionId,
        choice: ChoiceId,
    ) -> Result<Choice, RepositoryError>;

    /// Atomically add one vote to a choice of a question
    ///
    /// The increment must be evaluated by the store as a single delta
    /// statement, never read into memory and written back. Fails with
    /// [`RepositoryError::ChoiceNotFound`] when the pair does not match a
    /// record; counts are unchanged in that case.
    async fn increment_vote(
        &self,
        question: QuestionId,
        choice: ChoiceId,
    ) -> Result<(), RepositoryError>;
}
