//! Axum route handlers for the Career Quiz API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::catalog::models::QuizQuestion;
use crate::catalog::tags::Tag;
use crate::catalog::Catalog;
use crate::errors::AppError;
use crate::quiz::engine::{evaluate, QuizResult, ResultStage, MAX_TOP_TAGS};
use crate::quiz::session::{QuizPhase, QuizSession};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct QuestionsQuery {
    pub stage: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    /// One entry per answered question, each the tag slugs of the chosen option.
    pub answers: Vec<Vec<String>>,
    pub top_n: Option<usize>,
    pub stage: Option<ResultStage>,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub result: QuizResult,
    /// Slugs that matched no known tag and were left out of the tally.
    pub ignored_tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub question_id: u32,
    pub option_id: String,
}

#[derive(Debug, Serialize)]
pub struct CurrentQuestion {
    pub question: QuizQuestion,
    /// 1-based position within the stage.
    pub number: usize,
    pub stage_size: usize,
    pub selected_option: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: Uuid,
    pub phase: QuizPhase,
    pub answered: usize,
    pub total_questions: usize,
    pub current: Option<CurrentQuestion>,
}

impl SessionView {
    fn of(session: &QuizSession, catalog: &Catalog) -> Self {
        let current = session.current_question(catalog).map(|q| {
            let in_stage: Vec<&QuizQuestion> = catalog
                .ordered_questions()
                .into_iter()
                .filter(|other| other.stage == q.stage)
                .collect();
            let number = in_stage
                .iter()
                .position(|other| other.id == q.id)
                .map(|i| i + 1)
                .unwrap_or(1);
            CurrentQuestion {
                question: q.clone(),
                number,
                stage_size: in_stage.len(),
                selected_option: session.current_answer().map(|a| a.option_id.clone()),
            }
        });

        SessionView {
            session_id: session.id,
            phase: session.phase,
            answered: session.answered_count(),
            total_questions: catalog.questions.len(),
            current,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/quiz/questions?stage=N
pub async fn handle_list_questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionsQuery>,
) -> Result<Json<Vec<QuizQuestion>>, AppError> {
    if let Some(stage) = params.stage {
        if !(1..=2).contains(&stage) {
            return Err(AppError::Validation(format!(
                "stage must be 1 or 2, got {stage}"
            )));
        }
    }
    let questions = state
        .catalog
        .ordered_questions()
        .into_iter()
        .filter(|q| params.stage.map_or(true, |s| q.stage == s))
        .cloned()
        .collect();
    Ok(Json(questions))
}

/// POST /api/v1/quiz/score
///
/// Stateless scoring of raw tag answers. Unknown slugs are dropped, not rejected.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let top_n = request.top_n.unwrap_or(state.config.top_tags);
    if top_n == 0 || top_n > MAX_TOP_TAGS {
        return Err(AppError::Validation(format!(
            "top_n must be between 1 and {MAX_TOP_TAGS}"
        )));
    }

    let mut ignored_tags = Vec::new();
    let answers: Vec<Vec<Tag>> = request
        .answers
        .iter()
        .map(|answer| {
            answer
                .iter()
                .filter_map(|slug| match Tag::from_slug(slug) {
                    Some(Tag::General) | None => {
                        ignored_tags.push(slug.clone());
                        None
                    }
                    Some(tag) => Some(tag),
                })
                .collect()
        })
        .collect();

    let result = evaluate(
        &answers,
        &state.catalog,
        state.matcher.as_ref(),
        top_n,
        request.stage.unwrap_or(ResultStage::Final),
    );

    Ok(Json(ScoreResponse {
        result,
        ignored_tags,
    }))
}

/// POST /api/v1/quiz/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let session = QuizSession::new(&state.catalog);
    let view = SessionView::of(&session, &state.catalog);
    state.sessions.insert(session).await;
    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/quiz/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.get(id).await?;
    Ok(Json(SessionView::of(&session, &state.catalog)))
}

/// POST /api/v1/quiz/sessions/:id/start
pub async fn handle_start(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.update(id, |s| s.start()).await?;
    Ok(Json(SessionView::of(&session, &state.catalog)))
}

/// POST /api/v1/quiz/sessions/:id/answers
pub async fn handle_answer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<SessionView>, AppError> {
    let catalog = state.catalog.as_ref();
    let session = state
        .sessions
        .update(id, |s| s.answer(catalog, request.question_id, &request.option_id))
        .await?;

    if matches!(
        session.phase,
        QuizPhase::IntermediateResults | QuizPhase::FinalResults
    ) {
        info!("Quiz session {id} reached {}", session.phase);
    }
    Ok(Json(SessionView::of(&session, catalog)))
}

/// POST /api/v1/quiz/sessions/:id/back
pub async fn handle_back(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let catalog = state.catalog.as_ref();
    let session = state.sessions.update(id, |s| s.back(catalog)).await?;
    Ok(Json(SessionView::of(&session, catalog)))
}

/// POST /api/v1/quiz/sessions/:id/continue
pub async fn handle_continue(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let catalog = state.catalog.as_ref();
    let session = state
        .sessions
        .update(id, |s| s.continue_to_stage_two(catalog))
        .await?;
    Ok(Json(SessionView::of(&session, catalog)))
}

/// POST /api/v1/quiz/sessions/:id/retake
pub async fn handle_retake(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let session = state.sessions.update(id, |s| Ok(s.retake())).await?;
    Ok(Json(SessionView::of(&session, &state.catalog)))
}

/// GET /api/v1/quiz/sessions/:id/results
///
/// Intermediate results after stage 1, final results after stage 2. Both are
/// recomputed from the stored answers on every call.
pub async fn handle_results(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuizResult>, AppError> {
    let session = state.sessions.get(id).await?;
    let result = session.results(
        &state.catalog,
        state.matcher.as_ref(),
        state.config.top_tags,
    )?;
    Ok(Json(result))
}
