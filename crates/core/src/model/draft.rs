use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::chapter::{Chapter, CourseSummary};
use crate::model::ids::ProblemId;
use crate::model::score::Score;
use crate::model::section::{Section, ShowCorrectness};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Structural gaps in a provider handoff. These are fatal: no report can
/// be built from a hierarchy with missing levels.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("course snapshot has no chapter list")]
    MissingChapters,

    #[error("chapter '{chapter}' has no section list")]
    MissingSections { chapter: String },
}

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

/// Course hierarchy exactly as handed over by the course-structure
/// provider.
///
/// Structural levels may be absent in a malformed handoff, so the chapter
/// and section lists are optional here; [`CourseDraft::validate`] turns a
/// complete draft into a [`CourseSummary`]. Scores are trusted input and
/// deliberately not checked at this stage.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CourseDraft {
    /// Absent and `null` both read as a missing level.
    #[serde(default)]
    pub chapters: Option<Vec<ChapterDraft>>,
}

/// One chapter of a provider handoff.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChapterDraft {
    pub display_name: String,
    pub url_name: String,
    #[serde(default)]
    pub sections: Option<Vec<SectionDraft>>,
}

/// One section of a provider handoff. Every field beyond the names is
/// optional on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionDraft {
    pub display_name: String,
    pub url_name: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub graded: bool,
    #[serde(default)]
    pub show_correctness: ShowCorrectness,
    pub total: Score,
    #[serde(default)]
    pub problem_scores: BTreeMap<ProblemId, Score>,
}

impl CourseDraft {
    /// Validates the hierarchy and produces the immutable snapshot.
    ///
    /// Present-but-empty lists are structurally valid; only absent lists
    /// are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::MissingChapters`] when the chapter list
    /// is absent, or [`HierarchyError::MissingSections`] for the first
    /// chapter whose section list is absent.
    pub fn validate(self) -> Result<CourseSummary, HierarchyError> {
        let Some(chapters) = self.chapters else {
            return Err(HierarchyError::MissingChapters);
        };
        let chapters = chapters
            .into_iter()
            .map(ChapterDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CourseSummary::new(chapters))
    }
}

impl ChapterDraft {
    /// Validates one chapter subtree.
    ///
    /// # Errors
    ///
    /// Returns [`HierarchyError::MissingSections`] when the section list
    /// is absent.
    pub fn validate(self) -> Result<Chapter, HierarchyError> {
        let Some(sections) = self.sections else {
            return Err(HierarchyError::MissingSections {
                chapter: self.display_name,
            });
        };
        Ok(Chapter {
            display_name: self.display_name,
            url_name: self.url_name,
            sections: sections
                .into_iter()
                .map(SectionDraft::into_section)
                .collect(),
        })
    }
}

impl SectionDraft {
    /// Carries the draft fields into the domain type. Infallible: every
    /// malformed-score case is handled later, per section, at build time.
    #[must_use]
    pub fn into_section(self) -> Section {
        Section {
            display_name: self.display_name,
            url_name: self.url_name,
            format: self.format,
            due: self.due,
            graded: self.graded,
            show_correctness: self.show_correctness,
            total: self.total,
            problem_scores: self.problem_scores,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
