pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as profiles;
use crate::eligibility::handlers as eligibility;
use crate::events::handlers as events;
use crate::quiz::handlers as quiz;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Career quiz
        .route("/api/v1/quiz/questions", get(quiz::handle_list_questions))
        .route("/api/v1/quiz/score", post(quiz::handle_score))
        .route("/api/v1/quiz/sessions", post(quiz::handle_create_session))
        .route("/api/v1/quiz/sessions/:id", get(quiz::handle_get_session))
        .route("/api/v1/quiz/sessions/:id/start", post(quiz::handle_start))
        .route("/api/v1/quiz/sessions/:id/answers", post(quiz::handle_answer))
        .route("/api/v1/quiz/sessions/:id/back", post(quiz::handle_back))
        .route(
            "/api/v1/quiz/sessions/:id/continue",
            post(quiz::handle_continue),
        )
        .route("/api/v1/quiz/sessions/:id/retake", post(quiz::handle_retake))
        .route("/api/v1/quiz/sessions/:id/results", get(quiz::handle_results))
        // Profiles
        .route("/api/v1/profiles", get(profiles::handle_list_profiles))
        .route("/api/v1/profiles/:tag", get(profiles::handle_get_profile))
        // Eligibility checker
        .route("/api/v1/eligibility", post(eligibility::handle_check_eligibility))
        .route(
            "/api/v1/eligibility/programmes",
            get(eligibility::handle_list_programmes),
        )
        // Skills self-assessment
        .route("/api/v1/skills/statements", get(skills::handle_list_statements))
        .route("/api/v1/skills/assessment", post(skills::handle_assess))
        // Events
        .route("/api/v1/events", get(events::handle_list_events))
        .with_state(state)
}
