//! GitHub adapter

use async_trait::async_trait;
use prwatch_config::Config;
use prwatch_ghapi_interface::{
    review::GhReviewApi,
    types::{GhCommitStatus, GhPullRequest},
    ApiService, Result,
};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

/// GitHub API adapter implementation.
#[derive(Clone)]
pub struct GithubApiService {
    config: Config,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, GitHubError> {
        Ok(get_authenticated_client_builder(&self.config)?.build()?)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, GitHubError> {
        Ok(self
            .get_client()?
            .get(url)
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self))]
    async fn pulls_list_open(&self, owner: &str, name: &str) -> Result<Vec<GhPullRequest>> {
        let url = self.build_url(format!("/repos/{owner}/{name}/pulls"));
        Ok(self.get_json(&url, &[("state", "open")]).await?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn pull_reviews_list(&self, pull_request_url: &str) -> Result<Vec<GhReviewApi>> {
        let url = format!("{}/reviews", pull_request_url.trim_end_matches('/'));
        Ok(self.get_json(&url, &[]).await?)
    }

    #[tracing::instrument(skip(self), ret)]
    async fn commit_statuses_combined(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
    ) -> Result<GhCommitStatus> {
        let url = self.build_url(format!("/repos/{owner}/{name}/commits/{git_ref}/status"));
        Ok(self.get_json(&url, &[]).await?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use prwatch_ghapi_interface::{review::GhReviewStateApi, types::GhCommitStatusState};
    use serde_json::json;
    use wiremock::{
        matchers::{header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn arrange_service(server: &MockServer) -> GithubApiService {
        let mut config = Config::from_env_no_version();
        config.api.github.root_url = server.uri();
        config.api.github.token = "this-is-a-token".into();
        GithubApiService::new(config)
    }

    fn pull_request_json(server: &MockServer, number: u64) -> serde_json::Value {
        json!({
            "number": number,
            "state": "open",
            "title": format!("PR {number}"),
            "user": {"login": "octocat"},
            "body": null,
            "html_url": format!("https://github.com/me/repo/pull/{number}"),
            "created_at": "2024-01-10T08:00:00Z",
            "updated_at": "2024-01-10T09:00:00Z",
            "head": {"label": "me:feature", "ref": "feature", "sha": "abc123", "user": null},
            "base": {"label": "me:main", "ref": "main", "sha": "def456", "user": null},
            "_links": {
                "self": {"href": format!("{}/repos/me/repo/pulls/{number}", server.uri())}
            }
        })
    }

    #[tokio::test]
    async fn test_pulls_list_open() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/me/repo/pulls"))
            .and(query_param("state", "open"))
            .and(header("authorization", "Bearer this-is-a-token"))
            .and(header("accept", "application/vnd.github+json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                pull_request_json(&server, 1),
                pull_request_json(&server, 2)
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let pulls = arrange_service(&server)
            .pulls_list_open("me", "repo")
            .await
            .unwrap();

        assert_eq!(
            pulls.iter().map(|p| p.number).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(
            pulls[0].api_url(),
            format!("{}/repos/me/repo/pulls/1", server.uri())
        );
    }

    #[tokio::test]
    async fn test_pull_reviews_list_uses_pull_request_link() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/me/repo/pulls/1/reviews"))
            .and(header("authorization", "Bearer this-is-a-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": 10,
                    "user": {"login": "reviewer"},
                    "state": "APPROVED",
                    "submitted_at": "2024-01-10T10:00:00Z"
                }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let reviews = arrange_service(&server)
            .pull_reviews_list(&format!("{}/repos/me/repo/pulls/1", server.uri()))
            .await
            .unwrap();

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].state, GhReviewStateApi::Approved);
    }

    #[tokio::test]
    async fn test_commit_statuses_combined() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/me/repo/commits/abc123/status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "state": "failure",
                "statuses": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let status = arrange_service(&server)
            .commit_statuses_combined("me", "repo", "abc123")
            .await
            .unwrap();

        assert_eq!(status.state, GhCommitStatusState::Failure);
    }

    #[tokio::test]
    async fn test_error_status_is_propagated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/me/repo/pulls"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "Bad credentials"
            })))
            .mount(&server)
            .await;

        assert!(arrange_service(&server)
            .pulls_list_open("me", "repo")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_propagated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/me/repo/commits/abc123/status"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        assert!(arrange_service(&server)
            .commit_statuses_combined("me", "repo", "abc123")
            .await
            .is_err());
    }
}
