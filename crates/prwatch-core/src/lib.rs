//! Logic module.

#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

mod context;
pub mod errors;
pub mod use_cases;

pub use context::CoreContext;
#[cfg(any(test, feature = "testkit"))]
pub use context::tests::CoreContextTest;
pub use errors::{DomainError, Result};
use shaku::module;
use use_cases::{
    alerts::{
        build_alert_report::BuildAlertReport, collect_alerts::CollectAlerts,
        send_alert_report::SendAlertReport,
    },
    pulls::check_pull_request::CheckPullRequest,
};

module! {
    pub CoreModule {
        components = [
            CheckPullRequest, CollectAlerts, BuildAlertReport, SendAlertReport
        ],
        providers = []
    }
}
