use async_trait::async_trait;
use prwatch_ghapi_interface::types::GhPullRequest;
use prwatch_models::{PullRequestCheck, RepositoryPath};
use shaku::{Component, Interface};
use time::{Duration, OffsetDateTime};
use tracing::debug;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CheckPullRequestInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        pull_request: &GhPullRequest,
        now: OffsetDateTime,
    ) -> Result<PullRequestCheck>;
}

#[derive(Component)]
#[shaku(interface = CheckPullRequestInterface)]
pub(crate) struct CheckPullRequest;

#[async_trait]
impl CheckPullRequestInterface for CheckPullRequest {
    #[tracing::instrument(
        skip(self, ctx, pull_request),
        fields(repository_path = %repository_path, number = pull_request.number),
        ret
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        pull_request: &GhPullRequest,
        now: OffsetDateTime,
    ) -> Result<PullRequestCheck> {
        let threshold_hours = ctx.config.alerts.age_threshold_hours;
        if !is_old_enough(pull_request.created_at, now, threshold_hours) {
            debug!(
                created_at = %pull_request.created_at,
                threshold_hours,
                message = "Pull request too recent, skipping"
            );
            return Ok(PullRequestCheck::Skipped);
        }

        let reviews = ctx
            .api_service
            .pull_reviews_list(pull_request.api_url())
            .await?;

        let commit_status = ctx
            .api_service
            .commit_statuses_combined(
                repository_path.owner(),
                repository_path.name(),
                &pull_request.head.sha,
            )
            .await?;

        let ci_failed = commit_status.state.is_failure();
        if ci_failed {
            debug!(
                failing_contexts = ?commit_status.failing_contexts(),
                message = "Combined commit status is failing"
            );
        }

        Ok(PullRequestCheck::Checked {
            unreviewed: reviews.is_empty(),
            ci_failed,
        })
    }
}

/// The age gate: a pull request exactly `threshold_hours` old is checked.
fn is_old_enough(created_at: OffsetDateTime, now: OffsetDateTime, threshold_hours: u64) -> bool {
    let threshold_seconds = i64::try_from(threshold_hours.saturating_mul(3600)).unwrap_or(i64::MAX);
    now - created_at >= Duration::seconds(threshold_seconds)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use prwatch_ghapi_interface::{
        review::GhReviewApi,
        types::{GhBranch, GhCommitStatus, GhCommitStatusState, GhLink, GhPullRequestLinks},
    };
    use time::macros::datetime;

    use super::*;
    use crate::context::tests::CoreContextTest;

    const NOW: OffsetDateTime = datetime!(2024-03-01 12:00:00 UTC);

    fn pull_request(age: Duration) -> GhPullRequest {
        GhPullRequest {
            number: 1,
            title: "Add feature".into(),
            created_at: NOW - age,
            head: GhBranch {
                sha: "abc123".into(),
                ..Default::default()
            },
            links: GhPullRequestLinks {
                self_link: GhLink {
                    href: "https://api.github.com/repos/me/repo/pulls/1".into(),
                },
                html: None,
            },
            ..Default::default()
        }
    }

    fn arrange(reviews: Vec<GhReviewApi>, state: GhCommitStatusState) -> CoreContextTest {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_pull_reviews_list()
            .once()
            .withf(|url| url == "https://api.github.com/repos/me/repo/pulls/1")
            .return_once(move |_| Ok(reviews));
        ctx.api_service
            .expect_commit_statuses_combined()
            .once()
            .withf(|owner, name, git_ref| owner == "me" && name == "repo" && git_ref == "abc123")
            .return_once(move |_, _, _| {
                Ok(GhCommitStatus {
                    state,
                    statuses: vec![],
                })
            });
        ctx
    }

    async fn check(ctx: &CoreContextTest, age: Duration) -> PullRequestCheck {
        CheckPullRequest
            .run(
                &ctx.as_context(),
                &("me", "repo").into(),
                &pull_request(age),
                NOW,
            )
            .await
            .unwrap()
    }

    #[test]
    fn age_gate() {
        assert!(!is_old_enough(NOW - Duration::hours(2), NOW, 12));
        assert!(!is_old_enough(NOW - Duration::hours(12) + Duration::seconds(1), NOW, 12));
        assert!(is_old_enough(NOW - Duration::hours(12), NOW, 12));
        assert!(is_old_enough(NOW - Duration::hours(20), NOW, 12));
        assert!(!is_old_enough(NOW + Duration::hours(1), NOW, 0));
        assert!(!is_old_enough(NOW - Duration::days(365), NOW, u64::MAX));
    }

    #[tokio::test]
    async fn recent_pull_request_is_skipped_without_calls() {
        let ctx = CoreContextTest::new();

        assert_eq!(
            check(&ctx, Duration::hours(2)).await,
            PullRequestCheck::Skipped
        );
    }

    #[tokio::test]
    async fn old_unreviewed_with_passing_ci() {
        let ctx = arrange(vec![], GhCommitStatusState::Success);

        assert_eq!(
            check(&ctx, Duration::hours(20)).await,
            PullRequestCheck::Checked {
                unreviewed: true,
                ci_failed: false
            }
        );
    }

    #[tokio::test]
    async fn old_reviewed_with_failing_ci() {
        let ctx = arrange(vec![GhReviewApi::default()], GhCommitStatusState::Failure);

        assert_eq!(
            check(&ctx, Duration::hours(15)).await,
            PullRequestCheck::Checked {
                unreviewed: false,
                ci_failed: true
            }
        );
    }

    #[tokio::test]
    async fn only_failure_state_counts_as_failed_ci() {
        for state in [
            GhCommitStatusState::Success,
            GhCommitStatusState::Pending,
            GhCommitStatusState::Error,
            GhCommitStatusState::Unknown,
        ] {
            let ctx = arrange(vec![GhReviewApi::default()], state);

            assert_eq!(
                check(&ctx, Duration::hours(13)).await,
                PullRequestCheck::Checked {
                    unreviewed: false,
                    ci_failed: false
                },
                "state {state}"
            );
        }
    }

    #[tokio::test]
    async fn api_errors_are_propagated() {
        let mut ctx = CoreContextTest::new();
        ctx.api_service
            .expect_pull_reviews_list()
            .once()
            .return_once(|_| {
                Err(prwatch_ghapi_interface::ApiError::ImplementationError {
                    source: "boom".into(),
                })
            });

        let result = CheckPullRequest
            .run(
                &ctx.as_context(),
                &("me", "repo").into(),
                &pull_request(Duration::hours(20)),
                NOW,
            )
            .await;

        assert!(matches!(result, Err(crate::DomainError::ApiError { .. })));
    }
}
