use async_trait::async_trait;
use prwatch_models::{AlertBuckets, RepositoryPath};
use shaku::{Component, HasComponent, Interface};
use time::OffsetDateTime;

use super::{utils::message_generator::AlertMessageGenerator, CollectAlertsInterface};
use crate::{CoreContext, Result};

/// Outcome of one run, before delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertReport {
    pub buckets: AlertBuckets,
    pub message: String,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait BuildAlertReportInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, now: OffsetDateTime) -> Result<AlertReport>;
}

#[derive(Component)]
#[shaku(interface = BuildAlertReportInterface)]
pub(crate) struct BuildAlertReport;

#[async_trait]
impl BuildAlertReportInterface for BuildAlertReport {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, now: OffsetDateTime) -> Result<AlertReport> {
        let collect_alerts: &dyn CollectAlertsInterface = ctx.core_module.resolve_ref();

        let repository_path = RepositoryPath::new_from_components(
            &ctx.config.repository.owner,
            &ctx.config.repository.name,
        );
        let buckets = collect_alerts.run(ctx, &repository_path, now).await?;
        let message = AlertMessageGenerator::default()
            .generate(&buckets, ctx.config.alerts.age_threshold_hours);

        Ok(AlertReport { buckets, message })
    }
}
