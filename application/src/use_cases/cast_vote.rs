//! Cast Vote use case
//!
//! The only write path in the application. Validates the submission, then
//! delegates the increment to the repository as a single atomic delta so
//! concurrent voters cannot lose updates.

use std::sync::Arc;

use pollbooth_domain::{ChoiceId, PollRepository, QuestionId, RepositoryError};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while casting a vote
#[derive(Error, Debug)]
pub enum CastVoteError {
    #[error("question {0} not found")]
    QuestionNotFound(QuestionId),

    #[error("no choice was selected")]
    MissingSelection,

    #[error("choice {choice} does not belong to question {question}")]
    InvalidChoice {
        question: QuestionId,
        choice: ChoiceId,
    },

    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

impl CastVoteError {
    /// The message shown to the voter when the form should be redisplayed
    ///
    /// Both malformed-submission cases collapse into one message, matching
    /// what the voter can actually do about it: pick a choice and resubmit.
    /// Returns `None` for errors that are not recoverable by the voter.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            CastVoteError::MissingSelection | CastVoteError::InvalidChoice { .. } => {
                Some("You didn't select a choice.")
            }
            _ => None,
        }
    }
}

/// Input for the CastVote use case
#[derive(Debug, Clone, Copy)]
pub struct CastVoteInput {
    /// The question being voted on
    pub question: QuestionId,
    /// The submitted choice, if the form carried one
    pub choice: Option<ChoiceId>,
}

impl CastVoteInput {
    pub fn new(question: QuestionId, choice: Option<ChoiceId>) -> Self {
        Self { question, choice }
    }
}

/// Output of a successful vote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastVoteOutput {
    /// Where the client should be redirected: the results view of this
    /// question. Redirect-after-post keeps a back-button resubmission from
    /// counting twice.
    pub results_for: QuestionId,
}

/// Use case for recording a vote
pub struct CastVoteUseCase<R: PollRepository> {
    repository: Arc<R>,
}

impl<R: PollRepository> CastVoteUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Execute the use case
    ///
    /// Validation order matters: an absent question is a not-found
    /// condition even when no choice was submitted, so the question lookup
    /// happens first. On any failure all counts are left unchanged.
    pub async fn execute(&self, input: CastVoteInput) -> Result<CastVoteOutput, CastVoteError> {
        let question = self
            .repository
            .get_question(input.question)
            .await
            .map_err(|err| match err {
                RepositoryError::QuestionNotFound(id) => CastVoteError::QuestionNotFound(id),
                other => CastVoteError::Repository(other),
            })?;

        let choice = match input.choice {
            Some(choice) => choice,
            None => {
                debug!("Vote on question {} without a selection", question.id);
                return Err(CastVoteError::MissingSelection);
            }
        };

        match self.repository.increment_vote(question.id, choice).await {
            Ok(()) => {
                info!("Recorded vote for choice {} on question {}", choice, question.id);
                Ok(CastVoteOutput {
                    results_for: question.id,
                })
            }
            Err(RepositoryError::ChoiceNotFound { question, choice }) => {
                debug!("Vote for foreign choice {} on question {}", choice, question);
                Err(CastVoteError::InvalidChoice { question, choice })
            }
            Err(other) => Err(CastVoteError::Repository(other)),
        }
    }
}
