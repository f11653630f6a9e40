use axum::{
    extract::{Path, State},
    Json,
};

use crate::catalog::models::Profile;
use crate::catalog::tags::Tag;
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/profiles
pub async fn handle_list_profiles(State(state): State<AppState>) -> Json<Vec<Profile>> {
    Json(state.catalog.profiles.clone())
}

/// GET /api/v1/profiles/:tag
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Profile>, AppError> {
    let profile = Tag::from_slug(&slug)
        .and_then(|tag| state.catalog.profile(tag))
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Profile '{slug}' not found")))?;
    Ok(Json(profile))
}
