//! Feedback model matching the frontend Feedback interface.

use serde::{Deserialize, Serialize};

/// A user-submitted rating with a free-text comment.
///
/// Feedback is read-only in the admin panel; there are no mutation
/// operations, so a single shape serves both the store and the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub user_name: String,
    pub date: String,
    /// Star rating, 1 through 5.
    pub rating: u8,
    pub comment: String,
}
