//! Issue tracker API endpoints, including the two-phase note editor.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, read_panel, success, write_panel, ApiResult};
use crate::errors::AppError;
use crate::models::{Issue, NoteDraftRequest, PanelState, SetIssueStatusRequest};
use crate::AppState;

/// GET /api/issues - Issues passing the panel's current category filter.
pub async fn list_issues(State(state): State<AppState>) -> ApiResult<Vec<Issue>> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    match read_panel(&state) {
        Ok(panel) => {
            let issues: Vec<Issue> = panel.filtered_issues().into_iter().cloned().collect();
            success(issues, revision_id)
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/issues/:id/status - Assign a new lifecycle status.
///
/// The status enum is closed; anything outside it is rejected by the JSON
/// extractor before this handler runs.
pub async fn update_issue_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SetIssueStatusRequest>,
) -> ApiResult<Issue> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    let updated = match write_panel(&state) {
        Ok(mut panel) => panel.set_issue_status(&id, request.status).cloned(),
        Err(e) => return error(e, revision_id),
    };

    match updated {
        Some(issue) => success(issue, revision_id),
        None => error(
            AppError::NotFound(format!("Issue {} not found", id)),
            revision_id,
        ),
    }
}

/// POST /api/issues/:id/note-editor - Open the note editor for an issue,
/// seeding the draft with its existing note. An already-open editor is
/// silently replaced.
pub async fn open_note_editor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<PanelState> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    match write_panel(&state) {
        Ok(mut panel) => {
            if panel.open_note_editor(&id) {
                success(panel.state(), revision_id)
            } else {
                error(
                    AppError::NotFound(format!("Issue {} not found", id)),
                    revision_id,
                )
            }
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/issues/note-draft - Replace the transient draft text.
pub async fn set_note_draft(
    State(state): State<AppState>,
    Json(request): Json<NoteDraftRequest>,
) -> ApiResult<PanelState> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    match write_panel(&state) {
        Ok(mut panel) => {
            panel.set_note_draft(&request.text);
            success(panel.state(), revision_id)
        }
        Err(e) => error(e, revision_id),
    }
}

/// DELETE /api/issues/note-editor - Discard the draft and close the editor
/// without touching any issue.
pub async fn cancel_note_editor(State(state): State<AppState>) -> ApiResult<PanelState> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    match write_panel(&state) {
        Ok(mut panel) => {
            panel.cancel_note_editor();
            success(panel.state(), revision_id)
        }
        Err(e) => error(e, revision_id),
    }
}

/// PUT /api/issues/:id/note - Commit the current draft into the issue's
/// admin note and close the editor.
pub async fn save_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Issue> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    let saved = match write_panel(&state) {
        Ok(mut panel) => panel.save_note(&id).cloned(),
        Err(e) => return error(e, revision_id),
    };

    match saved {
        Some(issue) => success(issue, revision_id),
        None => error(
            AppError::NotFound(format!("Issue {} not found", id)),
            revision_id,
        ),
    }
}
