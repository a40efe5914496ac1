use prwatch_models::{AlertBuckets, PullRequestAlert};

pub const ALL_CLEAR_MESSAGE: &str = "✅ All clear! No unreviewed or failed PRs.";
pub const FAILED_CI_HEADER: &str = "*❌ PRs with Failed CI:*";

#[derive(Default)]
pub struct AlertMessageGenerator {
    _private: (),
}

impl AlertMessageGenerator {
    /// Render the Slack mrkdwn summary for the alert buckets.
    #[tracing::instrument(skip(self, buckets), ret)]
    pub fn generate(&self, buckets: &AlertBuckets, threshold_hours: u64) -> String {
        if buckets.is_empty() {
            return ALL_CLEAR_MESSAGE.into();
        }

        let mut lines = Vec::new();
        if !buckets.unreviewed.is_empty() {
            lines.push(format!("*🚨 Unreviewed PRs (>{threshold_hours}h):*"));
            lines.extend(buckets.unreviewed.iter().map(Self::unreviewed_line));
        }

        if !buckets.failed_ci.is_empty() {
            lines.push(FAILED_CI_HEADER.into());
            lines.extend(buckets.failed_ci.iter().map(Self::failed_ci_line));
        }

        lines.join("\n")
    }

    fn unreviewed_line(alert: &PullRequestAlert) -> String {
        format!("- <{}|{}> by `{}`", alert.url, alert.title, alert.author)
    }

    fn failed_ci_line(alert: &PullRequestAlert) -> String {
        format!("- <{}|{}> (CI: Failed)", alert.url, alert.title)
    }
}
