use axum::{extract::State, Json};

use crate::eligibility::{check_eligibility, EligibilityReport, EligibilityRequest, Programme};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/eligibility/programmes
pub async fn handle_list_programmes(State(state): State<AppState>) -> Json<Vec<Programme>> {
    Json(state.catalog.programmes.clone())
}

/// POST /api/v1/eligibility
pub async fn handle_check_eligibility(
    State(state): State<AppState>,
    Json(request): Json<EligibilityRequest>,
) -> Result<Json<EligibilityReport>, AppError> {
    let report = check_eligibility(&request, &state.catalog.programmes)?;
    Ok(Json(report))
}
