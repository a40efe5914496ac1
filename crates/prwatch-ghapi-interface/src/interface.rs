use async_trait::async_trait;

use crate::{
    review::GhReviewApi,
    types::{GhCommitStatus, GhPullRequest},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List open pull requests from a repository (first page only).
    async fn pulls_list_open(&self, owner: &str, name: &str) -> Result<Vec<GhPullRequest>>;
    /// List reviews from a pull request, using its API URL.
    async fn pull_reviews_list(&self, pull_request_url: &str) -> Result<Vec<GhReviewApi>>;
    /// Get the combined commit status for a git reference.
    async fn commit_statuses_combined(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
    ) -> Result<GhCommitStatus>;
}
