//! Score-visibility policy for progress reports.
//!
//! Kept as total `match` tables so every row of the policy can be read and
//! tested on its own.

use courseware_core::model::ShowCorrectness;

/// Whether a viewer gets to see a section's per-problem scores.
///
/// Staff always do. Students see them when the policy is `Always`, or when
/// a `PastDue` policy has actually reached its due date.
#[must_use]
pub fn shows_scores(policy: ShowCorrectness, is_staff: bool, is_past_due: bool) -> bool {
    match (is_staff, policy, is_past_due) {
        (true, _, _) => true,
        (false, ShowCorrectness::Always, _) => true,
        (false, ShowCorrectness::PastDue, past_due) => past_due,
        (false, ShowCorrectness::Never, _) => false,
    }
}

/// Message shown in place of hidden scores.
///
/// Two axes: graded versus practice wording, and whether the scores will
/// appear on their own once the due date passes.
#[must_use]
pub fn suppression_message(graded: bool, policy: ShowCorrectness) -> &'static str {
    let until_due = matches!(policy, ShowCorrectness::PastDue);
    match (graded, until_due) {
        (true, true) => "Problem scores are hidden until the due date.",
        (true, false) => "Problem scores are hidden.",
        (false, true) => "Practice scores are hidden until the due date.",
        (false, false) => "Practice scores are hidden.",
    }
}

/// Heading announced over visible score rows.
#[must_use]
pub fn score_heading(graded: bool) -> &'static str {
    if graded {
        "Problem Scores: "
    } else {
        "Practice Scores: "
    }
}
