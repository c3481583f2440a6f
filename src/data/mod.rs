//! Sample issue reports.
//!
//! Stand-in for the in-app issue-reporting service. Every report starts
//! Open; the panel owns all further lifecycle changes for the session.

use crate::models::{Issue, IssueCategory, IssueStatus};

/// The fixed sample set seeded into the panel at startup.
pub fn sample_issues() -> Vec<Issue> {
    let reports = [
        (
            "ISS-001",
            IssueCategory::Voice,
            "Rush Mode heard \"do sau pachaas\" but recorded 350 instead of 250",
            "Ramesh Kumar",
            "ramesh.kirana@gmail.com",
            "2024-03-04T10:12:00Z",
            true,
        ),
        (
            "ISS-002",
            IssueCategory::Stock,
            "Stock count for loose rice goes negative after a partial sale",
            "Asha Verma",
            "+91 98201 44552",
            "2024-03-04T14:40:00Z",
            false,
        ),
        (
            "ISS-003",
            IssueCategory::Login,
            "OTP never arrives on Jio numbers, had to retry four times",
            "Farhan Sheikh",
            "farhan.s@outlook.com",
            "2024-03-05T08:05:00Z",
            false,
        ),
        (
            "ISS-004",
            IssueCategory::Ui,
            "Expense list overlaps the keyboard on small screens",
            "Meena Joshi",
            "meenajoshi@yahoo.in",
            "2024-03-05T19:22:00Z",
            true,
        ),
        (
            "ISS-005",
            IssueCategory::Voice,
            "Voice entry stops listening mid-sentence when the shop is noisy",
            "Sunil Patil",
            "+91 90040 17783",
            "2024-03-06T11:55:00Z",
            false,
        ),
        (
            "ISS-006",
            IssueCategory::Stock,
            "Imported stock sheet dropped every row with a blank unit column",
            "Divya Reddy",
            "divya.stores@gmail.com",
            "2024-03-06T16:30:00Z",
            true,
        ),
    ];

    reports
        .into_iter()
        .map(
            |(id, category, description, submitted_by, contact, timestamp, has_screenshot)| Issue {
                id: id.to_string(),
                category,
                description: description.to_string(),
                submitted_by: submitted_by.to_string(),
                contact: contact.to_string(),
                timestamp: timestamp.to_string(),
                has_screenshot,
                status: IssueStatus::Open,
                admin_note: None,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_issues_start_open_with_unique_ids() {
        let issues = sample_issues();
        assert!(issues.iter().all(|i| i.status == IssueStatus::Open));
        assert!(issues.iter().all(|i| i.admin_note.is_none()));

        let mut ids: Vec<&str> = issues.iter().map(|i| i.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), issues.len());
    }

    #[test]
    fn test_sample_covers_every_chip_category() {
        let issues = sample_issues();
        for category in [
            IssueCategory::Voice,
            IssueCategory::Stock,
            IssueCategory::Login,
            IssueCategory::Ui,
        ] {
            assert!(issues.iter().any(|i| i.category == category));
        }
    }
}
