//! Router assembly

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use pollbooth_domain::PollRepository;

use super::handlers;
use super::state::AppState;

/// Build the application router over the given state
pub fn router<R: PollRepository + 'static>(state: Arc<AppState<R>>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/polls/", get(handlers::index::<R>))
        .route("/polls/{question_id}/", get(handlers::detail::<R>))
        .route("/polls/{question_id}/results/", get(handlers::results::<R>))
        .route("/polls/{question_id}/vote/", post(handlers::vote::<R>))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use chrono::{Duration, Utc};
    use http_body_util::BodyExt;
    use pollbooth_domain::{ChoiceId, QuestionId};
    use pollbooth_infrastructure::{SqlitePollRepository, TeraRenderer};
    use sqlx::sqlite::SqlitePoolOptions;
    use tower::ServiceExt;

    struct Fixture {
        app: Router,
        question: QuestionId,
        choice_a: ChoiceId,
        choice_b: ChoiceId,
    }

    /// One question "Q1" with choices "A" and "B", both at zero votes
    async fn fixture() -> Fixture {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let repo = SqlitePollRepository::with_pool(pool);
        repo.apply_schema().await.unwrap();

        let question = repo.insert_question("Q1", Utc::now()).await.unwrap();
        let choice_a = repo.insert_choice(question, "A").await.unwrap();
        let choice_b = repo.insert_choice(question, "B").await.unwrap();

        let renderer = Arc::new(TeraRenderer::new().unwrap());
        let state = Arc::new(AppState::new(Arc::new(repo), renderer));
        Fixture {
            app: router(state),
            question,
            choice_a,
            choice_b,
        }
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_redirects_to_polls() {
        let fx = fixture().await;
        let response = fx.app.oneshot(get("/")).await.unwrap();
        assert!(response.status().is_redirection());
        assert_eq!(response.headers()[header::LOCATION], "/polls/");
    }

    #[tokio::test]
    async fn test_index_lists_question() {
        let fx = fixture().await;
        let response = fx.app.oneshot(get("/polls/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Q1"));
    }

    #[tokio::test]
    async fn test_detail_renders_form() {
        let fx = fixture().await;
        let uri = format!("/polls/{}/", fx.question);
        let response = fx.app.oneshot(get(&uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains(&format!("/polls/{}/vote/", fx.question)));
        assert!(body.contains(&format!("value=\"{}\"", fx.choice_a)));
        assert!(body.contains(&format!("value=\"{}\"", fx.choice_b)));
    }

    #[tokio::test]
    async fn test_detail_of_missing_question_is_404() {
        let fx = fixture().await;
        let response = fx.app.oneshot(get("/polls/999/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_results_of_missing_question_is_404() {
        let fx = fixture().await;
        let response = fx.app.oneshot(get("/polls/999/results/")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_vote_redirects_to_results() {
        let fx = fixture().await;
        let uri = format!("/polls/{}/vote/", fx.question);
        let body = format!("choice={}", fx.choice_a);

        let response = fx.app.clone().oneshot(post_form(&uri, &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()[header::LOCATION],
            format!("/polls/{}/results/", fx.question).as_str()
        );

        // The subsequent GET shows A at one vote, B untouched
        let results_uri = format!("/polls/{}/results/", fx.question);
        let response = fx.app.oneshot(get(&results_uri)).await.unwrap();
        let body = body_text(response).await;
        assert!(body.contains("A: 1 votes"));
        assert!(body.contains("B: 0 votes"));
    }

    #[tokio::test]
    async fn test_vote_without_selection_rerenders_form() {
        let fx = fixture().await;
        let uri = format!("/polls/{}/vote/", fx.question);

        let response = fx.app.clone().oneshot(post_form(&uri, "")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("You didn&#x27;t select a choice."));

        // Counts unchanged
        let results_uri = format!("/polls/{}/results/", fx.question);
        let response = fx.app.oneshot(get(&results_uri)).await.unwrap();
        assert!(body_text(response).await.contains("A: 0 votes"));
    }

    #[tokio::test]
    async fn test_vote_with_unknown_choice_rerenders_form() {
        let fx = fixture().await;
        let uri = format!("/polls/{}/vote/", fx.question);

        let response = fx
            .app
            .clone()
            .oneshot(post_form(&uri, "choice=9999"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("You didn&#x27;t select a choice."));
    }

    #[tokio::test]
    async fn test_vote_on_missing_question_is_404() {
        let fx = fixture().await;
        let response = fx
            .app
            .oneshot(post_form("/polls/999/vote/", "choice=1"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_index_bounded_to_five_questions() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let repo = SqlitePollRepository::with_pool(pool);
        repo.apply_schema().await.unwrap();
        let now = Utc::now();
        for i in 0..6 {
            repo.insert_question(&format!("Question {i}"), now - Duration::hours(6 - i))
                .await
                .unwrap();
        }
        let state = Arc::new(AppState::new(
            Arc::new(repo),
            Arc::new(TeraRenderer::new().unwrap()),
        ));

        let response = router(state).oneshot(get("/polls/")).await.unwrap();
        let body = body_text(response).await;
        // The oldest of the six must have fallen off the list
        assert!(!body.contains("Question 0"));
        assert!(body.contains("Question 5"));
        assert!(body.contains("Question 1"));
    }
}
