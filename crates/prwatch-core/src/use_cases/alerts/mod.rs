pub(crate) mod build_alert_report;
pub(crate) mod collect_alerts;
pub(crate) mod send_alert_report;
pub mod utils;

pub use build_alert_report::{AlertReport, BuildAlertReportInterface};
pub use collect_alerts::CollectAlertsInterface;
pub use send_alert_report::SendAlertReportInterface;

#[cfg(any(test, feature = "testkit"))]
pub use self::{
    build_alert_report::MockBuildAlertReportInterface,
    collect_alerts::MockCollectAlertsInterface, send_alert_report::MockSendAlertReportInterface,
};
