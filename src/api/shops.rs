//! Shop registry API endpoints.

use axum::extract::{Path, State};

use super::{error, read_panel, success, write_panel, ApiResult};
use crate::errors::AppError;
use crate::models::User;
use crate::AppState;

/// GET /api/shops - The shop registry. Platform operators are excluded.
pub async fn list_shops(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    match read_panel(&state) {
        Ok(panel) => {
            let shops: Vec<User> = panel.registry().into_iter().cloned().collect();
            success(shops, revision_id)
        }
        Err(e) => error(e, revision_id),
    }
}

/// POST /api/shops/:id/toggle-status - Flip a shop between Active and
/// Suspended and persist the collection.
pub async fn toggle_shop_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<User> {
    let revision_id = state.store.get_revision_id().await.unwrap_or(0);

    // Mutate under the lock, then persist outside it.
    let toggled = {
        let mut panel = match write_panel(&state) {
            Ok(panel) => panel,
            Err(e) => return error(e, revision_id),
        };
        match panel.toggle_status(&id) {
            Some(user) => {
                let user = user.clone();
                Some((user, panel.users().to_vec()))
            }
            None => None,
        }
    };

    match toggled {
        Some((user, users)) => match state.store.save_users(&users).await {
            Ok(new_revision) => success(user, new_revision),
            Err(e) => error(e, revision_id),
        },
        None => error(
            AppError::NotFound(format!("Shop {} not found", id)),
            revision_id,
        ),
    }
}
