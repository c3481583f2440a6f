//! Dashboard API endpoints.

use axum::extract::State;

use super::{error, read_panel, success, ApiResult};
use crate::models::DashboardStats;
use crate::AppState;

/// GET /api/dashboard - Derived statistics for the Overview tab.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<DashboardStats> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    match read_panel(&state) {
        Ok(panel) => success(panel.stats(), revision_id),
        Err(e) => error(e, revision_id),
    }
}
