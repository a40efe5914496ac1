//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use prwatch_config::Config;
use prwatch_core::{CoreContext, CoreModule};
use prwatch_ghapi_interface::ApiService;
use prwatch_notifier_interface::NotifierService;
use tokio::sync::RwLock;

use self::{preview::PreviewCommand, run::RunCommand};
use crate::Result;

pub(crate) mod preview;
pub(crate) mod run;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub notifier_service: Box<dyn NotifierService + Send + Sync>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            notifier_service: self.notifier_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Run(RunCommand),
    Preview(PreviewCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Run(sub) => sub.execute(ctx).await,
            Self::Preview(sub) => sub.execute(ctx).await,
        }
    }
}
