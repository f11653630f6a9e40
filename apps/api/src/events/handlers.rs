use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use crate::errors::AppError;
use crate::events::{filter_events, Event, EventFilter};
use crate::state::AppState;

/// GET /api/v1/events?category=&location=&from=&to=&free_only=&online_only=&q=
pub async fn handle_list_events(
    State(state): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> Result<Json<Vec<Event>>, AppError> {
    if let (Some(from), Some(to)) = (filter.from, filter.to) {
        if from > to {
            return Err(AppError::Validation(
                "'from' must not be after 'to'".to_string(),
            ));
        }
    }
    let today = Utc::now().date_naive();
    Ok(Json(filter_events(&state.catalog.events, &filter, today)))
}
