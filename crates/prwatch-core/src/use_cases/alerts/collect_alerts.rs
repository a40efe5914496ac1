use async_trait::async_trait;
use prwatch_models::{AlertBuckets, PullRequestAlert, PullRequestHandle, RepositoryPath};
use shaku::{Component, HasComponent, Interface};
use time::OffsetDateTime;
use tracing::{debug, info};

use crate::{use_cases::pulls::CheckPullRequestInterface, CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CollectAlertsInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        now: OffsetDateTime,
    ) -> Result<AlertBuckets>;
}

#[derive(Component)]
#[shaku(interface = CollectAlertsInterface)]
pub(crate) struct CollectAlerts;

#[async_trait]
impl CollectAlertsInterface for CollectAlerts {
    #[tracing::instrument(skip(self, ctx), fields(repository_path = %repository_path))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
        now: OffsetDateTime,
    ) -> Result<AlertBuckets> {
        let check_pull_request: &dyn CheckPullRequestInterface = ctx.core_module.resolve_ref();

        let pull_requests = ctx
            .api_service
            .pulls_list_open(repository_path.owner(), repository_path.name())
            .await?;
        info!(
            count = pull_requests.len(),
            message = "Fetched open pull requests"
        );

        // One pull request at a time, in the order returned by the API.
        let mut buckets = AlertBuckets::new();
        for pull_request in &pull_requests {
            let check = check_pull_request
                .run(ctx, repository_path, pull_request, now)
                .await?;

            let alert = PullRequestAlert {
                handle: PullRequestHandle::new(repository_path.clone(), pull_request.number),
                title: pull_request.title.clone(),
                author: pull_request.user.login.clone(),
                url: pull_request.html_url.clone(),
            };
            debug!(pull_request = %alert.handle, ?check, message = "Pull request checked");
            buckets.push(alert, check);
        }

        info!(
            unreviewed = buckets.unreviewed.len(),
            failed_ci = buckets.failed_ci.len(),
            message = "Pull requests classified"
        );

        Ok(buckets)
    }
}
