use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use time::OffsetDateTime;
use tracing::{info, warn};

use super::{AlertReport, BuildAlertReportInterface};
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SendAlertReportInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, now: OffsetDateTime) -> Result<AlertReport>;
}

#[derive(Component)]
#[shaku(interface = SendAlertReportInterface)]
pub(crate) struct SendAlertReport;

#[async_trait]
impl SendAlertReportInterface for SendAlertReport {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, now: OffsetDateTime) -> Result<AlertReport> {
        let build_alert_report: &dyn BuildAlertReportInterface = ctx.core_module.resolve_ref();
        let report = build_alert_report.run(ctx, now).await?;

        // Delivery failures are reported but never fail the run.
        match ctx.notifier_service.send_message(&report.message).await {
            Ok(receipt) if receipt.is_success() => {
                info!(
                    status_code = receipt.status_code,
                    message = "Alert report delivered"
                );
            }
            Ok(receipt) => {
                warn!(
                    status_code = receipt.status_code,
                    message = "Webhook answered with a non-success status"
                );
            }
            Err(e) => {
                warn!(error = %e, message = "Could not deliver alert report");
            }
        }

        Ok(report)
    }
}
