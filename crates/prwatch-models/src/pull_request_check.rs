use serde::{Deserialize, Serialize};

/// Outcome of the checks on a single pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum PullRequestCheck {
    /// Younger than the age threshold, nothing was checked.
    Skipped,
    /// Old enough to be checked.
    Checked {
        /// No review was submitted yet.
        unreviewed: bool,
        /// Combined commit status is `failure`.
        ci_failed: bool,
    },
}

impl PullRequestCheck {
    pub fn is_unreviewed(&self) -> bool {
        matches!(
            self,
            Self::Checked {
                unreviewed: true,
                ..
            }
        )
    }

    pub fn is_ci_failed(&self) -> bool {
        matches!(
            self,
            Self::Checked {
                ci_failed: true,
                ..
            }
        )
    }
}
