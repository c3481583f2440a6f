//! Panel-state models matching the frontend's UI-selection state.

use serde::{Deserialize, Serialize};

use super::CategoryFilter;

/// The three view modes of the admin panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelTab {
    Dashboard,
    Shops,
    Issues,
}

/// Snapshot of the panel's UI-selection state plus collection sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    pub active_tab: PanelTab,
    pub filter_category: CategoryFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing_issue_id: Option<String>,
    pub note_draft: String,
    pub user_count: usize,
    pub issue_count: usize,
    pub feedback_count: usize,
}

/// Revision information for change detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionInfo {
    pub revision_id: i64,
    pub generated_at: String,
}

/// Request body for switching the active tab.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetTabRequest {
    pub tab: PanelTab,
}

/// Request body for selecting a category filter chip.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetFilterRequest {
    pub category: CategoryFilter,
}
