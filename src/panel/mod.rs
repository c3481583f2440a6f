//! In-memory panel state store.
//!
//! [`AdminPanel`] owns the three collections plus the UI-selection state
//! (active tab, category filter, note-editing target, draft text) and is the
//! only way to mutate any of them. Every operation is synchronous and runs to
//! completion, so callers never observe a partial update. The store is plain
//! owned data with no rendering or I/O concerns, which keeps it testable on
//! its own; the HTTP layer wraps it in a lock and the persistence layer
//! seeds and drains it.

use crate::models::{
    CategoryFilter, DashboardStats, Feedback, Issue, IssueStatus, PanelState, PanelTab, User,
};

/// Transient note-editing state. Nothing here is committed to an issue
/// until `save_note` runs.
#[derive(Debug, Clone)]
struct NoteEditor {
    issue_id: String,
    draft: String,
}

/// The admin panel's session state.
#[derive(Debug)]
pub struct AdminPanel {
    users: Vec<User>,
    issues: Vec<Issue>,
    feedback: Vec<Feedback>,
    active_tab: PanelTab,
    filter: CategoryFilter,
    editor: Option<NoteEditor>,
}

impl AdminPanel {
    /// Build a panel from freshly loaded collections. The dashboard tab and
    /// the `All` filter are the initial selections.
    pub fn new(users: Vec<User>, issues: Vec<Issue>, feedback: Vec<Feedback>) -> Self {
        Self {
            users,
            issues,
            feedback,
            active_tab: PanelTab::Dashboard,
            filter: CategoryFilter::All,
            editor: None,
        }
    }

    // ==================== VIEWS ====================

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    /// The shop registry: every user except platform operators, in stored
    /// order.
    pub fn registry(&self) -> Vec<&User> {
        self.users.iter().filter(|u| !u.is_admin()).collect()
    }

    /// Issues passing the currently selected category filter, in stored
    /// order. `All` returns the collection untouched.
    pub fn filtered_issues(&self) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| self.filter.matches(i.category))
            .collect()
    }

    /// Derived dashboard figures. Pure with respect to the collections.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::for_shop_count(self.users.len())
    }

    /// Snapshot of the UI-selection state for the wire.
    pub fn state(&self) -> PanelState {
        PanelState {
            active_tab: self.active_tab,
            filter_category: self.filter,
            editing_issue_id: self.editor.as_ref().map(|e| e.issue_id.clone()),
            note_draft: self
                .editor
                .as_ref()
                .map(|e| e.draft.clone())
                .unwrap_or_default(),
            user_count: self.users.len(),
            issue_count: self.issues.len(),
            feedback_count: self.feedback.len(),
        }
    }

    // ==================== UI SELECTION ====================

    pub fn select_tab(&mut self, tab: PanelTab) {
        self.active_tab = tab;
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    // ==================== REGISTRY MUTATION ====================

    /// Flip a shop between Active and Suspended.
    ///
    /// Returns the updated user, or `None` when the id matches nothing (the
    /// collection is left untouched). All other fields and all other users
    /// are unchanged.
    pub fn toggle_status(&mut self, user_id: &str) -> Option<&User> {
        let user = self.users.iter_mut().find(|u| u.id == user_id)?;
        user.status = user.status.toggled();
        Some(user)
    }

    // ==================== ISSUE MUTATION ====================

    /// Assign a new lifecycle status to an issue. Any status may follow any
    /// other; only the targeted issue's status field changes. `None` when
    /// the id matches nothing.
    pub fn set_issue_status(&mut self, issue_id: &str, status: IssueStatus) -> Option<&Issue> {
        let issue = self.issues.iter_mut().find(|i| i.id == issue_id)?;
        issue.status = status;
        Some(issue)
    }

    // ==================== NOTE EDITOR ====================

    /// Start editing the admin note of `issue_id`, seeding the draft with
    /// the issue's existing note. At most one editor exists at a time;
    /// opening a second silently replaces the first, which is safe because
    /// the replaced draft was never committed. Returns `false` for an
    /// unknown id.
    pub fn open_note_editor(&mut self, issue_id: &str) -> bool {
        let Some(issue) = self.issues.iter().find(|i| i.id == issue_id) else {
            return false;
        };
        self.editor = Some(NoteEditor {
            issue_id: issue.id.clone(),
            draft: issue.admin_note.clone().unwrap_or_default(),
        });
        true
    }

    /// Replace the draft text. No-op when no editor is open.
    pub fn set_note_draft(&mut self, text: &str) {
        if let Some(editor) = self.editor.as_mut() {
            editor.draft = text.to_string();
        }
    }

    /// Discard the draft and close the editor without touching any issue.
    pub fn cancel_note_editor(&mut self) {
        self.editor = None;
    }

    /// Commit the current draft into `issue_id`'s admin note, then close the
    /// editor. The editor closes even when the id matches nothing, matching
    /// the original handler's behavior; the draft is simply discarded.
    pub fn save_note(&mut self, issue_id: &str) -> Option<&Issue> {
        let draft = self
            .editor
            .take()
            .map(|e| e.draft)
            .unwrap_or_default();
        let issue = self.issues.iter_mut().find(|i| i.id == issue_id)?;
        issue.admin_note = Some(draft);
        Some(issue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IssueCategory, StoredUser, UserStatus};

    fn user(id: &str, name: &str, role: Option<&str>) -> User {
        StoredUser {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            role: role.map(str::to_string),
            ..StoredUser::default()
        }
        .into_user("2024-01-01T00:00:00Z")
    }

    fn issue(id: &str, category: IssueCategory) -> Issue {
        Issue {
            id: id.to_string(),
            category,
            description: format!("issue {id}"),
            submitted_by: "Meena Joshi".to_string(),
            contact: "meena@example.com".to_string(),
            timestamp: "2024-02-10T09:15:00Z".to_string(),
            has_screenshot: false,
            status: IssueStatus::Open,
            admin_note: None,
        }
    }

    fn panel() -> AdminPanel {
        AdminPanel::new(
            vec![
                user("u-1", "Asha Verma", None),
                user("u-2", "Ravi Nair", None),
                user("u-3", "Platform Ops", Some("admin")),
            ],
            vec![
                issue("i-1", IssueCategory::Voice),
                issue("i-2", IssueCategory::Stock),
                issue("i-3", IssueCategory::Voice),
                issue("i-4", IssueCategory::Login),
            ],
            vec![],
        )
    }

    #[test]
    fn test_registry_excludes_admins() {
        let panel = panel();
        let registry = panel.registry();
        assert_eq!(registry.len(), 2);
        assert!(registry.iter().all(|u| !u.is_admin()));
    }

    #[test]
    fn test_toggle_status_flips_only_target() {
        let mut panel = panel();
        let before: Vec<User> = panel.users().to_vec();

        let updated = panel.toggle_status("u-1").cloned().unwrap();
        assert_eq!(updated.status, UserStatus::Suspended);

        // Every other field and every other user untouched.
        assert_eq!(panel.users()[0].shop_name, before[0].shop_name);
        assert_eq!(panel.users()[1], before[1]);
        assert_eq!(panel.users()[2], before[2]);
    }

    #[test]
    fn test_toggle_status_is_idempotent_over_two_calls() {
        let mut panel = panel();
        let original = panel.users()[1].status;
        panel.toggle_status("u-2");
        panel.toggle_status("u-2");
        assert_eq!(panel.users()[1].status, original);
    }

    #[test]
    fn test_toggle_status_unknown_id_is_a_no_op() {
        let mut panel = panel();
        let before: Vec<User> = panel.users().to_vec();
        assert!(panel.toggle_status("u-999").is_none());
        assert_eq!(panel.users(), before.as_slice());
    }

    #[test]
    fn test_filter_preserves_order_and_category() {
        let mut panel = panel();
        panel.set_filter(CategoryFilter::Voice);
        let filtered = panel.filtered_issues();
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id, "i-1");
        assert_eq!(filtered[1].id, "i-3");
        assert!(filtered.iter().all(|i| i.category == IssueCategory::Voice));
    }

    #[test]
    fn test_filter_all_is_identity() {
        let mut panel = panel();
        panel.set_filter(CategoryFilter::All);
        let all_ids: Vec<&str> = panel.filtered_issues().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(all_ids, vec!["i-1", "i-2", "i-3", "i-4"]);
    }

    #[test]
    fn test_set_issue_status_changes_only_status_field() {
        let mut panel = panel();
        let before: Vec<Issue> = panel.issues().to_vec();

        panel.set_issue_status("i-2", IssueStatus::Resolved);

        let after = panel.issues();
        assert_eq!(after[1].status, IssueStatus::Resolved);
        assert_eq!(after[1].description, before[1].description);
        assert_eq!(after[1].admin_note, before[1].admin_note);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[3], before[3]);
    }

    #[test]
    fn test_set_issue_status_unknown_id_is_a_no_op() {
        let mut panel = panel();
        let before: Vec<Issue> = panel.issues().to_vec();
        assert!(panel.set_issue_status("i-999", IssueStatus::Rejected).is_none());
        assert_eq!(panel.issues(), before.as_slice());
    }

    #[test]
    fn test_note_round_trip_with_unmodified_draft() {
        let mut panel = panel();
        panel.issues.iter_mut().find(|i| i.id == "i-1").unwrap().admin_note =
            Some("call reporter back".to_string());

        panel.open_note_editor("i-1");
        let saved = panel.save_note("i-1").cloned().unwrap();
        assert_eq!(saved.admin_note.as_deref(), Some("call reporter back"));
    }

    #[test]
    fn test_cancel_discards_draft_without_committing() {
        let mut panel = panel();
        panel.open_note_editor("i-1");
        panel.set_note_draft("half-typed thought");
        panel.cancel_note_editor();

        assert!(panel.issues()[0].admin_note.is_none());
        assert!(panel.state().editing_issue_id.is_none());
        assert_eq!(panel.state().note_draft, "");
    }

    #[test]
    fn test_save_note_commits_draft_and_clears_editor() {
        let mut panel = panel();
        panel.open_note_editor("i-3");
        panel.set_note_draft("duplicate of i-1");
        let saved = panel.save_note("i-3").cloned().unwrap();

        assert_eq!(saved.admin_note.as_deref(), Some("duplicate of i-1"));
        assert!(panel.state().editing_issue_id.is_none());
        assert_eq!(panel.state().note_draft, "");
    }

    #[test]
    fn test_opening_second_editor_replaces_first() {
        let mut panel = panel();
        panel.open_note_editor("i-1");
        panel.set_note_draft("about i-1");
        panel.open_note_editor("i-2");

        let state = panel.state();
        assert_eq!(state.editing_issue_id.as_deref(), Some("i-2"));
        // Draft reseeded from i-2's (empty) note, not carried over.
        assert_eq!(state.note_draft, "");
        assert!(panel.issues()[0].admin_note.is_none());
    }

    #[test]
    fn test_save_note_unknown_id_still_closes_editor() {
        let mut panel = panel();
        panel.open_note_editor("i-1");
        panel.set_note_draft("lost to the void");

        assert!(panel.save_note("i-999").is_none());
        assert!(panel.state().editing_issue_id.is_none());
        assert!(panel.issues()[0].admin_note.is_none());
    }

    #[test]
    fn test_open_note_editor_unknown_id() {
        let mut panel = panel();
        assert!(!panel.open_note_editor("i-999"));
        assert!(panel.state().editing_issue_id.is_none());
    }

    #[test]
    fn test_stats_never_mutate_and_handle_empty() {
        let empty = AdminPanel::new(vec![], vec![], vec![]);
        let stats = empty.stats();
        assert_eq!(stats.total_shops, 0);
        assert_eq!(stats.active_shops_today, 1);

        let panel = panel();
        let before: Vec<User> = panel.users().to_vec();
        let _ = panel.stats();
        assert_eq!(panel.users(), before.as_slice());
    }

    #[test]
    fn test_tab_selection() {
        let mut panel = panel();
        assert_eq!(panel.state().active_tab, PanelTab::Dashboard);
        panel.select_tab(PanelTab::Issues);
        assert_eq!(panel.state().active_tab, PanelTab::Issues);
    }
}
