//! Domain models.

mod alert_buckets;
mod pull_request_alert;
mod pull_request_check;
mod pull_request_handle;
mod repository_path;

pub use alert_buckets::AlertBuckets;
pub use pull_request_alert::PullRequestAlert;
pub use pull_request_check::PullRequestCheck;
pub use pull_request_handle::PullRequestHandle;
pub use repository_path::RepositoryPath;
