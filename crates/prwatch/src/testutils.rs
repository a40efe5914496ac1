use std::{io::Write, sync::Arc};

use clap::Parser;
use prwatch_config::Config;
use prwatch_core::CoreModule;
use prwatch_ghapi_interface::MockApiService;
use prwatch_notifier_interface::MockNotifierService;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
    Result,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
    pub notifier_service: MockNotifierService,
}

impl CommandContextTest {
    pub fn new() -> Self {
        let mut config = Config::from_env_no_version();
        config.repository.owner = "me".into();
        config.repository.name = "repo".into();
        config.alerts.age_threshold_hours = 12;

        Self {
            config,
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
            notifier_service: MockNotifierService::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            notifier_service: Box::new(self.notifier_service),
            writer,
        }
    }
}

pub(crate) async fn test_command_result(
    ctx: CommandContextTest,
    command_args: &[&str],
) -> Result<String> {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["prwatch"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = match Args::try_parse_from(command_args) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        };

        CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone())).await?;
    }

    let vec = buf.read().await.to_vec();
    Ok(String::from_utf8(vec)?)
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    test_command_result(ctx, command_args).await.unwrap()
}
