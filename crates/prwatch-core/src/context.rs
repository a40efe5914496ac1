use prwatch_config::Config;
use prwatch_ghapi_interface::ApiService;
use prwatch_notifier_interface::NotifierService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
    pub notifier_service: &'a (dyn NotifierService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub mod tests {
    use prwatch_config::Config;
    use prwatch_ghapi_interface::MockApiService;
    use prwatch_notifier_interface::MockNotifierService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
        pub notifier_service: MockNotifierService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
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

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
                notifier_service: &self.notifier_service,
            }
        }
    }
}
