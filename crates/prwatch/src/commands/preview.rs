use async_trait::async_trait;
use clap::Parser;
use prwatch_core::use_cases::alerts::BuildAlertReportInterface;
use shaku::HasComponent;
use time::OffsetDateTime;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Print the alert report without posting it
#[derive(Parser)]
pub(crate) struct PreviewCommand;

#[async_trait]
impl Command for PreviewCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let build_alert_report: &dyn BuildAlertReportInterface = ctx.core_module.resolve_ref();
        let report = build_alert_report
            .run(&ctx.as_core_context(), OffsetDateTime::now_utc())
            .await?;

        writeln!(ctx.writer.write().await, "{}", report.message)?;

        Ok(())
    }
}
