use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;
use time::OffsetDateTime;

use super::GhPullRequestState;
use crate::types::common::{GhBranch, GhPullRequestLinks, GhUser};

/// GitHub Pull request, as returned by the pull request list endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, SmartDefault, PartialEq, Eq)]
pub struct GhPullRequest {
    /// Number.
    pub number: u64,
    /// State.
    pub state: GhPullRequestState,
    /// Title.
    pub title: String,
    /// User.
    pub user: GhUser,
    /// Body.
    pub body: Option<String>,
    /// Web URL.
    pub html_url: String,
    /// Created at.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Updated at.
    #[default(OffsetDateTime::now_utc())]
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Draft.
    #[serde(default)]
    pub draft: bool,
    /// Head branch.
    pub head: GhBranch,
    /// Base branch.
    pub base: GhBranch,
    /// Hypermedia links.
    #[serde(rename = "_links")]
    pub links: GhPullRequestLinks,
}

impl GhPullRequest {
    /// API URL of the pull request.
    pub fn api_url(&self) -> &str {
        &self.links.self_link.href
    }
}
