use serde::{Deserialize, Serialize};

/// Combined commit status for a ref.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
pub struct GhCommitStatus {
    /// Aggregated state.
    #[serde(default)]
    pub state: GhCommitStatusState,
    /// Individual statuses.
    #[serde(default)]
    pub statuses: Vec<GhCommitStatusItem>,
}

impl GhCommitStatus {
    /// Contexts of the individual statuses in failure or error.
    pub fn failing_contexts(&self) -> Vec<&str> {
        self.statuses
            .iter()
            .filter(|s| matches!(s.state, GhCommitStatusState::Failure | GhCommitStatusState::Error))
            .map(|s| s.context.as_str())
            .collect()
    }
}

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
pub struct GhCommitStatusItem {
    #[serde(default)]
    pub state: GhCommitStatusState,
    pub context: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub target_url: Option<String>,
}

/// Commit status state.
///
/// Missing or unrecognized states decode as `Unknown`.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum GhCommitStatusState {
    Error,
    Failure,
    Pending,
    Success,
    #[default]
    #[serde(other)]
    Unknown,
}

impl GhCommitStatusState {
    /// Only an explicit `failure` counts as failed CI.
    pub fn is_failure(self) -> bool {
        self == Self::Failure
    }
}

serde_plain::derive_display_from_serialize!(GhCommitStatusState);
