#![forbid(unsafe_code)]

pub mod report;

pub use courseware_core::Clock;

pub use report::{
    ChapterItem, DueDate, PointsDisplay, ProgressReport, ReportBuilder, ScoreDisplay, ScoreFault,
    SectionItem, SectionLink,
};
