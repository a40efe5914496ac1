use serde::{Deserialize, Serialize};

use crate::PullRequestHandle;

/// Pull request reported in an alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestAlert {
    pub handle: PullRequestHandle,
    pub title: String,
    /// Author login.
    pub author: String,
    /// Web URL.
    pub url: String,
}
