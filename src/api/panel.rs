//! Panel state API endpoints.

use axum::{extract::State, Json};

use super::{error, read_panel, success, write_panel, ApiResult};
use crate::models::{PanelState, RevisionInfo, SetFilterRequest, SetTabRequest};
use crate::AppState;

/// GET /api/panel - Snapshot of the panel's UI-selection state.
pub async fn get_panel(State(state): State<AppState>) -> ApiResult<PanelState> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    match read_panel(&state) {
        Ok(panel) => success(panel.state(), revision_id),
        Err(e) => error(e, revision_id),
    }
}

/// GET /api/panel/revision - Get the current revision info.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision_info =
        state
            .store
            .get_revision_info()
            .await
            .map_err(|e| crate::errors::AppErrorWithRevision {
                error: e,
                revision_id: 0,
            })?;

    success(revision_info.clone(), revision_info.revision_id)
}

/// PUT /api/panel/tab - Switch the active view mode.
pub async fn set_active_tab(
    State(state): State<AppState>,
    Json(request): Json<SetTabRequest>,
) -> ApiResult<PanelState> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    match write_panel(&state) {
        Ok(mut panel) => {
            panel.select_tab(request.tab);
            success(panel.state(), revision_id)
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/panel/filter - Select a category filter chip.
pub async fn set_category_filter(
    State(state): State<AppState>,
    Json(request): Json<SetFilterRequest>,
) -> ApiResult<PanelState> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    match write_panel(&state) {
        Ok(mut panel) => {
            panel.set_filter(request.category);
            success(panel.state(), revision_id)
        }
        Err(e) => error(e, revision_id),
    }
}
