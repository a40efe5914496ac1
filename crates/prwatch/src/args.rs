use std::sync::Arc;

use clap::Parser;
use prwatch_config::{ApiDriver, Config};
use prwatch_core::CoreModule;
use prwatch_ghapi_github::GithubApiService;
use prwatch_ghapi_interface::ApiService;
use prwatch_ghapi_null::NullApiService;
use prwatch_notifier_slack::SlackNotifierService;
use prwatch_sentry::with_sentry_configuration;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{run::RunCommand, Command, CommandContext, SubCommand},
    Result,
};

/// Alert on stale or failing pull requests.
///
/// Without a subcommand, `run` is executed.
#[derive(Parser)]
#[command(version, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: Option<SubCommand>,
}

impl Args {
    /// Whether the selected command posts to the webhook.
    pub(crate) fn requires_notifier(&self) -> bool {
        !matches!(self.cmd, Some(SubCommand::Preview(_)))
    }

    fn into_command(self) -> SubCommand {
        self.cmd.unwrap_or(SubCommand::Run(RunCommand))
    }
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        runtime.block_on(async move {
            let ctx = Self::build_context(config.clone());

            with_sentry_configuration(&config, move || async move {
                Self::parse_args_async(args, ctx).await
            })
            .await
        })
    }

    fn build_context(config: Config) -> CommandContext {
        let api_service: Box<dyn ApiService + Send + Sync + 'static> = {
            if config.api.driver == ApiDriver::GitHub {
                info!("Using GithubApiService API driver");
                Box::new(GithubApiService::new(config.clone()))
            } else {
                info!("Using NullApiService API driver");
                Box::new(NullApiService::new())
            }
        };

        CommandContext {
            notifier_service: Box::new(SlackNotifierService::new(config.clone())),
            config,
            api_service,
            core_module: CoreModule::builder().build(),
            writer: Arc::new(RwLock::new(std::io::stdout())),
        }
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.into_command().execute(ctx).await
    }
}
