//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use pollbooth_application::{
    CastVoteError, ListQuestionsError, QuestionDetailError, QuestionResultsError, RenderError,
};
use thiserror::Error;
use tracing::error;

/// Terminal request failures
///
/// Recoverable vote-form problems never become an `AppError`; the vote
/// handler re-renders the form instead. Everything here ends the request
/// with an error status.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("internal error: {0}")]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl AppError {
    fn internal(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Internal(Box::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Html("<h1>Not Found</h1>".to_string()),
            )
                .into_response(),
            AppError::Internal(err) => {
                error!("Request failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html("<h1>Internal Server Error</h1>".to_string()),
                )
                    .into_response()
            }
        }
    }
}

impl From<ListQuestionsError> for AppError {
    fn from(err: ListQuestionsError) -> Self {
        match err {
            ListQuestionsError::Repository(inner) => AppError::internal(inner),
        }
    }
}

impl From<QuestionDetailError> for AppError {
    fn from(err: QuestionDetailError) -> Self {
        match err {
            QuestionDetailError::QuestionNotFound(_) => AppError::NotFound,
            QuestionDetailError::Repository(inner) => AppError::internal(inner),
        }
    }
}

impl From<QuestionResultsError> for AppError {
    fn from(err: QuestionResultsError) -> Self {
        match err {
            QuestionResultsError::QuestionNotFound(_) => AppError::NotFound,
            QuestionResultsError::Repository(inner) => AppError::internal(inner),
        }
    }
}

impl From<CastVoteError> for AppError {
    fn from(err: CastVoteError) -> Self {
        match err {
            CastVoteError::QuestionNotFound(_) => AppError::NotFound,
            // MissingSelection/InvalidChoice are handled by the vote
            // handler before this conversion is reached.
            other => AppError::Internal(Box::new(other)),
        }
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::internal(err)
    }
}
