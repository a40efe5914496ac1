use serde::{Deserialize, Serialize};

use crate::{PullRequestAlert, PullRequestCheck};

/// Pull requests flagged during one run, in fetch order.
///
/// A pull request can be present in both buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertBuckets {
    /// Old enough and without any review.
    pub unreviewed: Vec<PullRequestAlert>,
    /// Old enough and with a failing combined commit status.
    pub failed_ci: Vec<PullRequestAlert>,
}

impl AlertBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route an alert to the buckets matching its check outcome.
    pub fn push(&mut self, alert: PullRequestAlert, check: PullRequestCheck) {
        match (check.is_unreviewed(), check.is_ci_failed()) {
            (true, true) => {
                self.unreviewed.push(alert.clone());
                self.failed_ci.push(alert);
            }
            (true, false) => self.unreviewed.push(alert),
            (false, true) => self.failed_ci.push(alert),
            (false, false) => (),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.unreviewed.is_empty() && self.failed_ci.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn alert(number: u64) -> PullRequestAlert {
        PullRequestAlert {
            handle: ("me", "repo", number).into(),
            title: format!("PR {number}"),
            author: "dev".into(),
            url: format!("https://github.com/me/repo/pull/{number}"),
        }
    }

    #[test]
    fn push_routes_by_outcome() {
        let mut buckets = AlertBuckets::new();
        assert!(buckets.is_empty());

        buckets.push(alert(1), PullRequestCheck::Skipped);
        buckets.push(
            alert(2),
            PullRequestCheck::Checked {
                unreviewed: false,
                ci_failed: false,
            },
        );
        assert!(buckets.is_empty());

        buckets.push(
            alert(3),
            PullRequestCheck::Checked {
                unreviewed: true,
                ci_failed: true,
            },
        );
        buckets.push(
            alert(4),
            PullRequestCheck::Checked {
                unreviewed: false,
                ci_failed: true,
            },
        );
        buckets.push(
            alert(5),
            PullRequestCheck::Checked {
                unreviewed: true,
                ci_failed: false,
            },
        );

        assert_eq!(buckets.unreviewed, vec![alert(3), alert(5)]);
        assert_eq!(buckets.failed_ci, vec![alert(3), alert(4)]);
        assert!(!buckets.is_empty());
    }
}
