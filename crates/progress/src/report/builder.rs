use chrono::{DateTime, Utc};

use courseware_core::Error;
use courseware_core::model::{
    Chapter, CourseDraft, CourseSummary, Score, ScoreError, Section, ViewerContext,
};

use crate::Clock;

use super::format;
use super::view::{
    ChapterItem, DueDate, NO_SCORES_MESSAGE, PointsDisplay, ProgressReport, ScoreDisplay,
    ScoreFault, SectionItem, SectionLink,
};
use super::visibility;

/// Builds a render-ready progress report from a course snapshot.
///
/// The builder owns the viewer context and the clock; a build is a pure,
/// synchronous pass over the snapshot, so independent reports can be built
/// concurrently from clones.
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    viewer: ViewerContext,
    clock: Clock,
}

impl ReportBuilder {
    /// Creates a builder for the given viewer using the system clock.
    #[must_use]
    pub fn new(viewer: ViewerContext) -> Self {
        Self {
            viewer,
            clock: Clock::default(),
        }
    }

    /// Replaces the clock, pinning "now" for past-due decisions.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Validates a provider draft and builds the report in one step.
    ///
    /// # Errors
    ///
    /// Fails on a structurally incomplete hierarchy, see
    /// [`CourseDraft::validate`]. Invalid scores are not fatal; they are
    /// isolated per section during the build.
    pub fn build_from_draft(&self, draft: CourseDraft) -> Result<ProgressReport, Error> {
        let course = draft.validate()?;
        Ok(self.build(&course))
    }

    /// Builds the report for a validated snapshot.
    ///
    /// Chapters named with the hidden sentinel are dropped; everything
    /// else comes out in the order it went in.
    #[must_use]
    pub fn build(&self, course: &CourseSummary) -> ProgressReport {
        let now = self.clock.now();
        let mut faults = Vec::new();

        let chapters = course
            .visible_chapters()
            .map(|chapter| self.render_chapter(chapter, now, &mut faults))
            .collect();

        ProgressReport {
            generated_at: now,
            chapters,
            faults,
        }
    }

    fn render_chapter(
        &self,
        chapter: &Chapter,
        now: DateTime<Utc>,
        faults: &mut Vec<ScoreFault>,
    ) -> ChapterItem {
        let sections = chapter
            .sections
            .iter()
            .map(|section| match self.render_section(chapter, section, now) {
                Ok(item) => item,
                Err(err) => {
                    faults.push(ScoreFault {
                        chapter: chapter.url_name.clone(),
                        section: section.url_name.clone(),
                        reason: err.to_string(),
                    });
                    self.empty_section_item(chapter, section)
                }
            })
            .collect();

        ChapterItem {
            title: chapter.display_name.clone(),
            sections,
        }
    }

    /// Renders one section row. Score validation comes first so a contract
    /// violation rejects the whole row before any formatting runs.
    fn render_section(
        &self,
        chapter: &Chapter,
        section: &Section,
        now: DateTime<Utc>,
    ) -> Result<SectionItem, ScoreError> {
        section.total.validate()?;
        for score in section.problem_scores.values() {
            score.validate()?;
        }

        // The empty state wins over visibility: there is nothing to hide.
        let scores = if section.problem_scores.is_empty() {
            ScoreDisplay::NoScores {
                message: NO_SCORES_MESSAGE,
            }
        } else if visibility::shows_scores(
            section.show_correctness,
            self.viewer.is_staff,
            section.is_past_due(now),
        ) {
            ScoreDisplay::Rows {
                heading: visibility::score_heading(section.graded),
                rows: section.problem_scores.values().map(score_row).collect(),
            }
        } else {
            ScoreDisplay::Suppressed {
                message: visibility::suppression_message(
                    section.graded,
                    section.show_correctness,
                ),
            }
        };

        Ok(SectionItem {
            title: section.display_name.clone(),
            link: section_link(chapter, section),
            total: section.total,
            points: PointsDisplay::from_total(section.total),
            format: section.format.clone(),
            due: section.due.map(|due| DueDate::new(due, &self.viewer)),
            scores,
        })
    }

    /// Substitute row for a section whose scores were rejected: the header
    /// labels stay, every number is emptied.
    fn empty_section_item(&self, chapter: &Chapter, section: &Section) -> SectionItem {
        SectionItem {
            title: section.display_name.clone(),
            link: section_link(chapter, section),
            total: Score::zero(),
            points: None,
            format: section.format.clone(),
            due: section.due.map(|due| DueDate::new(due, &self.viewer)),
            scores: ScoreDisplay::Rows {
                heading: visibility::score_heading(section.graded),
                rows: Vec::new(),
            },
        }
    }
}

fn section_link(chapter: &Chapter, section: &Section) -> SectionLink {
    SectionLink {
        chapter: chapter.url_name.clone(),
        section: section.url_name.clone(),
    }
}

/// One "earned/possible" row. Each side is formatted on its own; the
/// fraction is never reduced.
fn score_row(score: &Score) -> String {
    format!(
        "{}/{}",
        format::significant(score.earned, 3),
        format::significant(score.possible, 3)
    )
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
