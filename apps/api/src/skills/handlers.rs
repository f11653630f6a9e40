use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::skills::{assess_skills, AssessmentReport, AssessmentRequest, SkillStatement};
use crate::state::AppState;

/// GET /api/v1/skills/statements
pub async fn handle_list_statements(State(state): State<AppState>) -> Json<Vec<SkillStatement>> {
    Json(state.catalog.skill_statements.clone())
}

/// POST /api/v1/skills/assessment
pub async fn handle_assess(
    State(state): State<AppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<AssessmentReport>, AppError> {
    let report = assess_skills(&request, &state.catalog.skill_statements)?;
    Ok(Json(report))
}
