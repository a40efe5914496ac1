use async_trait::async_trait;
use clap::Parser;
use prwatch_core::use_cases::alerts::SendAlertReportInterface;
use shaku::HasComponent;
use time::OffsetDateTime;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Check open pull requests and post the report to the webhook
#[derive(Parser)]
pub(crate) struct RunCommand;

#[async_trait]
impl Command for RunCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let send_alert_report: &dyn SendAlertReportInterface = ctx.core_module.resolve_ref();
        let report = send_alert_report
            .run(&ctx.as_core_context(), OffsetDateTime::now_utc())
            .await?;

        writeln!(
            ctx.writer.write().await,
            "Alert report sent for {}/{}: {} unreviewed, {} with failed CI.",
            ctx.config.repository.owner,
            ctx.config.repository.name,
            report.buckets.unreviewed.len(),
            report.buckets.failed_ci.len()
        )?;

        Ok(())
    }
}
