use chrono::{DateTime, Utc};
use serde::Serialize;

use courseware_core::model::{Score, ViewerContext};

use super::format;

/// Message shown for sections that have no problem scores at all.
pub const NO_SCORES_MESSAGE: &str = "No problem scores in this section";

//
// ─── REPORT TREE ───────────────────────────────────────────────────────────────
//

/// Render-ready progress report: an ordered tree of chapters and sections.
///
/// Every label that can be produced deterministically already is a string.
/// What remains is carried as request data: url names for the caller's
/// router, raw due timestamps for the external date renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReport {
    pub generated_at: DateTime<Utc>,
    pub chapters: Vec<ChapterItem>,
    /// Sections whose scores violated the score contract and were emptied.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub faults: Vec<ScoreFault>,
}

/// One visible chapter with its rendered sections, in course order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChapterItem {
    pub title: String,
    pub sections: Vec<SectionItem>,
}

/// One section row of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionItem {
    pub title: String,
    pub link: SectionLink,
    /// Raw aggregate fraction; zeroed when the section's scores were
    /// rejected.
    pub total: Score,
    /// The formatted "(earned/possible) NN%" block; absent when there is
    /// nothing to show.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<PointsDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<DueDate>,
    pub scores: ScoreDisplay,
}

/// Url-name pair the caller's router turns into a section link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionLink {
    pub chapter: String,
    pub section: String,
}

/// Due-date render request for the external date renderer.
///
/// The timestamp is carried untouched together with the viewer's locale
/// hints; the report itself never formats dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueDate {
    pub due: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Formatted score block shown next to a section title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointsDisplay {
    /// Earned points, three significant digits.
    pub earned: String,
    /// Possible points, three significant digits.
    pub possible: String,
    /// Whole-percent label; empty while nothing has been earned or nothing
    /// is possible.
    pub percentage: String,
}

/// What the scores area of a section shows. The three states are mutually
/// exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreDisplay {
    /// Per-problem rows under their heading, in problem-id order. The row
    /// list is empty when a contract violation emptied the section.
    Rows {
        heading: &'static str,
        rows: Vec<String>,
    },
    /// Scores exist but the visibility policy hides them from this viewer.
    Suppressed { message: &'static str },
    /// The section has no problem scores at all.
    NoScores { message: &'static str },
}

/// Record of a section whose scores were rejected and emptied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreFault {
    pub chapter: String,
    pub section: String,
    pub reason: String,
}

//
// ─── CONSTRUCTORS ──────────────────────────────────────────────────────────────
//

impl DueDate {
    /// Pairs a section's due timestamp with the viewer's locale hints.
    #[must_use]
    pub fn new(due: DateTime<Utc>, viewer: &ViewerContext) -> Self {
        Self {
            due,
            timezone: viewer.timezone.clone(),
            language: viewer.language.clone(),
        }
    }
}

impl PointsDisplay {
    /// Builds the formatted block for a section total, or `None` when both
    /// sides are zero and no block should render at all.
    #[must_use]
    pub fn from_total(total: Score) -> Option<Self> {
        if !total.has_points() {
            return None;
        }
        Some(Self {
            earned: format::significant(total.earned, 3),
            possible: format::significant(total.possible, 3),
            percentage: total
                .percentage_ratio()
                .map(format::percentage)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courseware_core::time::fixed_now;

    #[test]
    fn points_block_absent_for_zero_over_zero() {
        assert_eq!(PointsDisplay::from_total(Score::zero()), None);
    }

    #[test]
    fn zero_earned_keeps_the_fraction_but_drops_the_percentage() {
        // deliberate product rule: a 0/10 section shows its fraction with
        // no percentage next to it
        let points = PointsDisplay::from_total(Score::new(0.0, 10.0)).unwrap();
        assert_eq!(points.earned, "0");
        assert_eq!(points.possible, "10");
        assert_eq!(points.percentage, "");
    }

    #[test]
    fn earned_without_possible_also_drops_the_percentage() {
        let points = PointsDisplay::from_total(Score::new(3.0, 0.0)).unwrap();
        assert_eq!(points.earned, "3");
        assert_eq!(points.possible, "0");
        assert_eq!(points.percentage, "");
    }

    #[test]
    fn half_earned_renders_fifty_percent() {
        let points = PointsDisplay::from_total(Score::new(5.0, 10.0)).unwrap();
        assert_eq!(points.earned, "5");
        assert_eq!(points.possible, "10");
        assert_eq!(points.percentage, "50%");
    }

    #[test]
    fn due_date_carries_the_viewer_locale() {
        let viewer = ViewerContext::student()
            .with_timezone("America/New_York")
            .with_language("en");
        let request = DueDate::new(fixed_now(), &viewer);
        assert_eq!(request.due, fixed_now());
        assert_eq!(request.timezone.as_deref(), Some("America/New_York"));
        assert_eq!(request.language.as_deref(), Some("en"));
    }
}
