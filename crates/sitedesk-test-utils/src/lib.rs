//! Testing utilities for the sitedesk workspace
//!
//! Shared fixtures: a small work catalog and a three-phase timeline that
//! reference each other through the checklist id scheme.

#![allow(missing_docs)]

pub mod fixtures {
    use chrono::NaiveDate;
    use sitedesk_model::{
        ChecklistItem, KeyAction, PhaseTask, ProgressReport, ProjectPhase, ReportDraft, ReportId,
        TaskId, WorkCatalog,
    };

    /// A day in February 2026
    pub fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
    }

    pub fn catalog() -> WorkCatalog {
        WorkCatalog::new([
            (
                "Infrastructure",
                vec!["WMM laying", "Curbstone installation", "Storm drain", "Road asphalting"],
            ),
            (
                "Boundary & Security",
                vec![
                    "Compound wall",
                    "Main gate",
                    "Security cabin",
                    "CCTV wiring",
                    "Boom barrier",
                    "Fencing",
                ],
            ),
            ("Landscaping", vec!["Avenue trees", "Lawn", "Drip irrigation"]),
            ("Amenities", vec!["Clubhouse", "Kids play area", "Jogging track"]),
        ])
        .unwrap()
    }

    fn item(id: &str, text: &str, completed: bool) -> ChecklistItem {
        ChecklistItem::new(id, text, completed)
    }

    /// Phase 0 holds details outside the catalog; phase 1 and 2 use catalog ids
    pub fn timeline() -> Vec<ProjectPhase> {
        vec![
            ProjectPhase {
                phase: 1,
                title: "Land Acquisition & Approvals".into(),
                duration: "Nov '25 - Jan '26 (3 Months)".into(),
                start_date: NaiveDate::from_ymd_opt(2025, 11, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
                key_actions: vec![KeyAction::new(
                    "Land Acquisition",
                    vec![
                        item("land-acquisition-0", "Title search", true),
                        item("land-acquisition-1", "Sale deed registration", true),
                    ],
                )],
                deliverables: vec!["Clear Land Title".into()],
                tasks: vec![PhaseTask::new(TaskId::new("t1-1"), "Finalize legal docs", true)],
            },
            ProjectPhase {
                phase: 2,
                title: "Infrastructure Development".into(),
                duration: "Feb '26 - Jun '26 (5 Months)".into(),
                start_date: date(1),
                end_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
                key_actions: vec![
                    KeyAction::new(
                        "Roads & Drainage",
                        vec![
                            item("infrastructure-0", "WMM laying", false),
                            item("infrastructure-1", "Curbstone installation", false),
                            item("infrastructure-2", "Storm drain", false),
                        ],
                    ),
                    KeyAction::new(
                        "Boundary",
                        vec![
                            item("boundary-security-0", "Compound wall", false),
                            item("boundary-security-4", "Boom barrier", false),
                        ],
                    ),
                ],
                deliverables: vec!["Completed Road Network".into()],
                tasks: vec![PhaseTask::new(TaskId::new("t2-1"), "Site survey review", false)],
            },
            ProjectPhase {
                phase: 3,
                title: "Amenities & Handover".into(),
                duration: "Jul '26 - Oct '26 (4 Months)".into(),
                start_date: NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2026, 10, 31).unwrap(),
                key_actions: vec![KeyAction::new(
                    "Green Spaces",
                    vec![
                        item("landscaping-0", "Avenue trees", false),
                        item("amenities-1", "Kids play area", false),
                    ],
                )],
                deliverables: vec!["Handover to Association".into()],
                tasks: vec![PhaseTask::new(TaskId::new("t3-1"), "Snag list", true)],
            },
        ]
    }

    /// Catalog draft for `day` with `completed` ids ticked
    pub fn draft(day: u32, completed: &[&str]) -> ReportDraft {
        ReportDraft::new(date(day), catalog().template())
            .with_submitter("Sanjay Kumar")
            .completing(completed.iter().copied())
    }

    /// Saved report built from [`draft`]
    pub fn report(id: &str, day: u32, completed: &[&str]) -> ProgressReport {
        draft(day, completed).into_report(ReportId::new(id)).unwrap()
    }
}
