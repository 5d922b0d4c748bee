use crate::model::section::Section;

/// Chapter display name that excludes the chapter from progress reports.
pub const HIDDEN_CHAPTER_NAME: &str = "hidden";

/// A top-level course unit grouping sections, in course order.
#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub display_name: String,
    pub url_name: String,
    pub sections: Vec<Section>,
}

impl Chapter {
    /// True for chapters named with the `"hidden"` sentinel. The match is
    /// exact and case-sensitive; such chapters are dropped before any
    /// rendering step.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.display_name == HIDDEN_CHAPTER_NAME
    }
}

/// A fully materialized, immutable snapshot of the course hierarchy.
///
/// Report builds only ever read from a complete snapshot; they never
/// observe partial or concurrently mutating structures.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub chapters: Vec<Chapter>,
}

impl CourseSummary {
    #[must_use]
    pub fn new(chapters: Vec<Chapter>) -> Self {
        Self { chapters }
    }

    /// Chapters that participate in the report, in supplied order.
    pub fn visible_chapters(&self) -> impl Iterator<Item = &Chapter> + '_ {
        self.chapters.iter().filter(|chapter| !chapter.is_hidden())
    }
}
