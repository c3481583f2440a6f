//! Issue report model matching the frontend Issue interface.
//!
//! Issues arrive from the in-app problem reporter; until that service ships
//! they are seeded from a fixed sample set (see `data`).

use serde::{Deserialize, Serialize};

/// Lifecycle status of an issue report.
///
/// The selector on the panel is a closed control, so this is a flat enum
/// assignment rather than a guarded workflow: any status may move to any
/// other. Strings outside this set fail deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueStatus {
    Open,
    #[serde(rename = "In-Progress")]
    InProgress,
    Resolved,
    Rejected,
}

/// Reporter-supplied category of an issue.
///
/// The tail variant absorbs categories newer consumer builds may send
/// before the panel learns a chip for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueCategory {
    Voice,
    Stock,
    Login,
    #[serde(rename = "UI")]
    Ui,
    #[serde(other)]
    Other,
}

/// A user-submitted issue report with its administrative state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub category: IssueCategory,
    pub description: String,
    pub submitted_by: String,
    pub contact: String,
    pub timestamp: String,
    pub has_screenshot: bool,
    pub status: IssueStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_note: Option<String>,
}

/// Category filter selected via the panel chips. `All` is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Voice,
    Stock,
    Login,
    #[serde(rename = "UI")]
    Ui,
}

impl CategoryFilter {
    fn category(self) -> Option<IssueCategory> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Voice => Some(IssueCategory::Voice),
            CategoryFilter::Stock => Some(IssueCategory::Stock),
            CategoryFilter::Login => Some(IssueCategory::Login),
            CategoryFilter::Ui => Some(IssueCategory::Ui),
        }
    }

    /// Whether an issue with `category` passes this filter.
    pub fn matches(self, category: IssueCategory) -> bool {
        self.category().map_or(true, |wanted| wanted == category)
    }
}

/// Request body for updating an issue's lifecycle status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetIssueStatusRequest {
    pub status: IssueStatus,
}

/// Request body for replacing the transient note draft text.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDraftRequest {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&IssueStatus::InProgress).unwrap();
        assert_eq!(json, "\"In-Progress\"");
        let parsed: IssueStatus = serde_json::from_str("\"Resolved\"").unwrap();
        assert_eq!(parsed, IssueStatus::Resolved);
    }

    #[test]
    fn test_status_rejects_unknown_strings() {
        assert!(serde_json::from_str::<IssueStatus>("\"Closed\"").is_err());
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let parsed: IssueCategory = serde_json::from_str("\"Billing\"").unwrap();
        assert_eq!(parsed, IssueCategory::Other);
    }

    #[test]
    fn test_filter_all_matches_everything() {
        for category in [
            IssueCategory::Voice,
            IssueCategory::Stock,
            IssueCategory::Login,
            IssueCategory::Ui,
            IssueCategory::Other,
        ] {
            assert!(CategoryFilter::All.matches(category));
        }
    }

    #[test]
    fn test_filter_matches_exact_category_only() {
        assert!(CategoryFilter::Stock.matches(IssueCategory::Stock));
        assert!(!CategoryFilter::Stock.matches(IssueCategory::Voice));
        assert!(!CategoryFilter::Ui.matches(IssueCategory::Other));
    }
}
