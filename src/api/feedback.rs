//! Feedback API endpoints.

use axum::extract::State;

use super::{error, read_panel, success, ApiResult};
use crate::models::Feedback;
use crate::AppState;

/// GET /api/feedback - List all feedback. Read-only; there are no feedback
/// mutations anywhere in the panel.
pub async fn list_feedback(State(state): State<AppState>) -> ApiResult<Vec<Feedback>> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    match read_panel(&state) {
        Ok(panel) => success(panel.feedback().to_vec(), revision_id),
        Err(e) => error(e, revision_id),
    }
}
