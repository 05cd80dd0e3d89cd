//! Request handlers
//!
//! Each handler translates one inbound request into a use-case call and a
//! rendering instruction (or a redirect). Handlers hold no state of their
//! own.

use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};
use pollbooth_application::{CastVoteInput, QuestionWithChoices, Template};
use pollbooth_domain::{ChoiceId, PollRepository, QuestionId};
use serde::Deserialize;
use serde_json::json;

use super::error::AppError;
use super::state::AppState;

/// Vote form body; `choice` is absent when nothing was selected
#[derive(Debug, Deserialize)]
pub struct VoteForm {
    pub choice: Option<i64>,
}

/// GET `/` - convenience redirect to the poll listing
pub async fn root() -> Redirect {
    Redirect::to("/polls/")
}

/// GET `/polls/` - the five latest questions
pub async fn index<R: PollRepository>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Html<String>, AppError> {
    let questions = state.list_questions.execute().await?;
    let body = state.renderer.render(
        Template::Index,
        &json!({ "latest_question_list": questions }),
    )?;
    Ok(Html(body))
}

/// GET `/polls/{question_id}/` - a question's voting form
pub async fn detail<R: PollRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(question_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let view = state
        .question_detail
        .execute(QuestionId::new(question_id))
        .await?;
    let body = state
        .renderer
        .render(Template::Detail, &detail_context(&view, None))?;
    Ok(Html(body))
}

/// GET `/polls/{question_id}/results/` - a question's tallies
pub async fn results<R: PollRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(question_id): Path<i64>,
) -> Result<Html<String>, AppError> {
    let view = state
        .question_results
        .execute(QuestionId::new(question_id))
        .await?;
    let body = state.renderer.render(
        Template::Results,
        &json!({ "question": view.question, "choices": view.choices }),
    )?;
    Ok(Html(body))
}

/// POST `/polls/{question_id}/vote/` - record a vote
///
/// Success responds with a 302 to the results view so a back-button
/// resubmission fetches instead of voting twice. A malformed submission
/// re-renders the form with an error message at HTTP 200 so the voter can
/// correct it.
pub async fn vote<R: PollRepository>(
    State(state): State<Arc<AppState<R>>>,
    Path(question_id): Path<i64>,
    Form(form): Form<VoteForm>,
) -> Result<Response, AppError> {
    let question = QuestionId::new(question_id);
    let input = CastVoteInput::new(question, form.choice.map(ChoiceId::new));

    match state.cast_vote.execute(input).await {
        Ok(output) => {
            let location = format!("/polls/{}/results/", output.results_for);
            Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
        }
        Err(err) => match err.user_message() {
            Some(message) => {
                let view = state.question_detail.execute(question).await?;
                let body = state
                    .renderer
                    .render(Template::Detail, &detail_context(&view, Some(message)))?;
                Ok(Html(body).into_response())
            }
            None => Err(err.into()),
        },
    }
}

fn detail_context(view: &QuestionWithChoices, error_message: Option<&str>) -> serde_json::Value {
    let mut context = json!({
        "question": &view.question,
        "choices": &view.choices,
    });
    if let Some(message) = error_message {
        context["error_message"] = json!(message);
    }
    context
}
