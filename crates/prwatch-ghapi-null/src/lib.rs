//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use prwatch_ghapi_interface::{
    review::GhReviewApi,
    types::{GhCommitStatus, GhCommitStatusState, GhPullRequest},
    ApiService, Result,
};

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn pulls_list_open(&self, owner: &str, name: &str) -> Result<Vec<GhPullRequest>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_reviews_list(&self, pull_request_url: &str) -> Result<Vec<GhReviewApi>> {
        Ok(vec![])
    }

    #[tracing::instrument(skip(self), ret)]
    async fn commit_statuses_combined(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
    ) -> Result<GhCommitStatus> {
        Ok(GhCommitStatus {
            state: GhCommitStatusState::Success,
            statuses: vec![],
        })
    }
}
