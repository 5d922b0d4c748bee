mod chapter;
mod draft;
mod ids;
mod score;
mod section;
mod viewer;

pub use chapter::{Chapter, CourseSummary, HIDDEN_CHAPTER_NAME};
pub use draft::{ChapterDraft, CourseDraft, HierarchyError, SectionDraft};
pub use ids::ProblemId;
pub use score::{Score, ScoreError};
pub use section::{Section, ShowCorrectness};
pub use viewer::ViewerContext;
