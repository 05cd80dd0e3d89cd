//! Shared handler state

use std::sync::Arc;

use pollbooth_application::{
    CastVoteUseCase, ListQuestionsUseCase, PageRenderer, QuestionDetailUseCase,
    QuestionResultsUseCase,
};
use pollbooth_domain::PollRepository;

/// Everything the handlers need, built once at startup
///
/// The state is wrapped in an `Arc` by the router and cloned per request;
/// nothing in it is mutable.
pub struct AppState<R: PollRepository> {
    pub list_questions: ListQuestionsUseCase<R>,
    pub question_detail: QuestionDetailUseCase<R>,
    pub question_results: QuestionResultsUseCase<R>,
    pub cast_vote: CastVoteUseCase<R>,
    pub renderer: Arc<dyn PageRenderer>,
}

impl<R: PollRepository> AppState<R> {
    pub fn new(repository: Arc<R>, renderer: Arc<dyn PageRenderer>) -> Self {
        Self {
            list_questions: ListQuestionsUseCase::new(Arc::clone(&repository)),
            question_detail: QuestionDetailUseCase::new(Arc::clone(&repository)),
            question_results: QuestionResultsUseCase::new(Arc::clone(&repository)),
            cast_vote: CastVoteUseCase::new(repository),
            renderer,
        }
    }
}
