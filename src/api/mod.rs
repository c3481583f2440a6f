//! REST API module.
//!
//! Contains all API routes and handlers following the frontend contract.

mod dashboard;
mod feedback;
mod issues;
mod panel;
mod shops;

pub use dashboard::*;
pub use feedback::*;
pub use issues::*;
pub use panel::*;
pub use shops::*;

use std::sync::{RwLockReadGuard, RwLockWriteGuard};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::panel::AdminPanel;
use crate::AppState;

/// Success response envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    pub revision_id: i64,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, revision_id: i64) -> Self {
        Self {
            success: true,
            data,
            revision_id,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppErrorWithRevision>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T, revision_id: i64) -> ApiResult<T> {
    Ok(ApiResponse::new(data, revision_id))
}

/// Create an error API response.
pub fn error<T: Serialize>(err: AppError, revision_id: i64) -> ApiResult<T> {
    Err(crate::errors::AppErrorWithRevision {
        error: err,
        revision_id,
    })
}

/// Acquire the panel for reading. A poisoned lock means a handler panicked
/// mid-mutation, which the panel's total operations rule out; still map it
/// instead of unwrapping.
pub(crate) fn read_panel(state: &AppState) -> Result<RwLockReadGuard<'_, AdminPanel>, AppError> {
    state
        .panel
        .read()
        .map_err(|_| AppError::Internal("Panel state lock poisoned".to_string()))
}

/// Acquire the panel for writing. Guards must be dropped before any await.
pub(crate) fn write_panel(state: &AppState) -> Result<RwLockWriteGuard<'_, AdminPanel>, AppError> {
    state
        .panel
        .write()
        .map_err(|_| AppError::Internal("Panel state lock poisoned".to_string()))
}
