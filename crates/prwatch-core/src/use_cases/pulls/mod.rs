pub(crate) mod check_pull_request;

pub use check_pull_request::CheckPullRequestInterface;
#[cfg(any(test, feature = "testkit"))]
pub use check_pull_request::MockCheckPullRequestInterface;
