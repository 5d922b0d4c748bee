use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::ids::ProblemId;
use crate::model::score::Score;

//
// ─── SHOW CORRECTNESS ──────────────────────────────────────────────────────────
//

/// Policy controlling when a section's detailed scores are visible.
///
/// Stored and transmitted as the strings `"always"`, `"past_due"` and
/// `"never"`; sections that carry no policy default to `Always`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowCorrectness {
    /// Scores are always visible.
    #[default]
    Always,
    /// Scores become visible once the section's due date has passed.
    PastDue,
    /// Scores are never shown to students.
    Never,
}

impl ShowCorrectness {
    /// The wire string for this policy.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ShowCorrectness::Always => "always",
            ShowCorrectness::PastDue => "past_due",
            ShowCorrectness::Never => "never",
        }
    }
}

//
// ─── SECTION ───────────────────────────────────────────────────────────────────
//

/// A gradable or practice sub-unit within a chapter.
///
/// Holds the aggregate score over all of its problems plus the per-problem
/// scores, keyed by problem id so iteration order is stable.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub display_name: String,
    pub url_name: String,
    /// Assignment-type label, e.g. "Homework". Absent for unclassified
    /// sections.
    pub format: Option<String>,
    pub due: Option<DateTime<Utc>>,
    /// Graded sections announce "Problem Scores", practice sections
    /// "Practice Scores".
    pub graded: bool,
    pub show_correctness: ShowCorrectness,
    /// Aggregate score across every problem in the section.
    pub total: Score,
    pub problem_scores: BTreeMap<ProblemId, Score>,
}

impl Section {
    /// True once the section's due date has been reached.
    ///
    /// The deadline itself counts as past due. A section without a due
    /// date is never past due, so a `PastDue` policy on it never
    /// auto-reveals.
    #[must_use]
    pub fn is_past_due(&self, now: DateTime<Utc>) -> bool {
        match self.due {
            Some(due) => now >= due,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn build_section(due: Option<DateTime<Utc>>) -> Section {
        Section {
            display_name: "Simple Questions".into(),
            url_name: "simple_questions".into(),
            format: None,
            due,
            graded: true,
            show_correctness: ShowCorrectness::default(),
            total: Score::zero(),
            problem_scores: BTreeMap::new(),
        }
    }

    #[test]
    fn policy_defaults_to_always() {
        assert_eq!(ShowCorrectness::default(), ShowCorrectness::Always);
    }

    #[test]
    fn policy_wire_strings_round_trip() {
        for policy in [
            ShowCorrectness::Always,
            ShowCorrectness::PastDue,
            ShowCorrectness::Never,
        ] {
            let json = format!("\"{}\"", policy.as_str());
            let parsed: ShowCorrectness = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, policy);
        }
    }

    #[test]
    fn deadline_counts_as_past_due() {
        let section = build_section(Some(fixed_now()));
        assert!(section.is_past_due(fixed_now()));
        assert!(section.is_past_due(fixed_now() + Duration::hours(1)));
        assert!(!section.is_past_due(fixed_now() - Duration::hours(1)));
    }

    #[test]
    fn no_due_date_is_never_past_due() {
        let section = build_section(None);
        assert!(!section.is_past_due(fixed_now() + Duration::days(365)));
    }
}
