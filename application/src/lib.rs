//! Application layer for pollbooth
//!
//! This crate contains the four poll use cases and the port definitions
//! consumed by them. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use ports::renderer::{PageRenderer, RenderError, Template};
pub use use_cases::cast_vote::{CastVoteError, CastVoteInput, CastVoteOutput, CastVoteUseCase};
pub use use_cases::list_questions::{ListQuestionsError, ListQuestionsUseCase, LATEST_QUESTION_LIMIT};
pub use use_cases::question_detail::{QuestionDetailError, QuestionDetailUseCase};
pub use use_cases::question_results::{QuestionResultsError, QuestionResultsUseCase};
pub use use_cases::shared::QuestionWithChoices;
