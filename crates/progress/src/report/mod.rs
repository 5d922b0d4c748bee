mod builder;
mod view;

pub mod format;
pub mod visibility;

// Public API of the report subsystem.
pub use builder::ReportBuilder;
pub use view::{
    ChapterItem, DueDate, NO_SCORES_MESSAGE, PointsDisplay, ProgressReport, ScoreDisplay,
    ScoreFault, SectionItem, SectionLink,
};
