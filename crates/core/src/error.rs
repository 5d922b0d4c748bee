use thiserror::Error;

use crate::model::HierarchyError;
use crate::model::ScoreError;

/// Union of everything that can go wrong between a provider handoff and a
/// finished report.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Hierarchy(#[from] HierarchyError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}
