use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a problem within a section.
///
/// Problem identifiers are opaque usage-key strings assigned by the course
/// structure; their `Ord` is what gives per-problem score rows a stable
/// order.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProblemId(String);

impl ProblemId {
    /// Creates a new `ProblemId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//
// ─── CONVERSIONS ───────────────────────────────────────────────────────────────
//

impl From<&str> for ProblemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProblemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

//
// ─── DISPLAY IMPLEMENTATIONS ───────────────────────────────────────────────────
//

impl fmt::Debug for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProblemId({})", self.0)
    }
}

impl fmt::Display for ProblemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_bare_string() {
        let id = ProblemId::new("hw1_problem_2");
        assert_eq!(id.to_string(), "hw1_problem_2");
        assert_eq!(id.as_str(), "hw1_problem_2");
    }

    #[test]
    fn orders_lexicographically() {
        let mut ids = vec![
            ProblemId::new("problem_3"),
            ProblemId::new("problem_1"),
            ProblemId::new("problem_2"),
        ];
        ids.sort();
        let ordered: Vec<&str> = ids.iter().map(ProblemId::as_str).collect();
        assert_eq!(ordered, vec!["problem_1", "problem_2", "problem_3"]);
    }
}
