//! Pull request reviews.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::types::GhUser;

/// Review state (API version)
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GhReviewStateApi {
    /// Approved.
    Approved,
    /// Changes requested.
    ChangesRequested,
    /// Commented.
    Commented,
    /// Dismissed.
    Dismissed,
    /// Pending.
    Pending,
    /// Unknown.
    #[serde(other)]
    Unknown,
}

impl Display for GhReviewStateApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = serde_plain::to_string(&self).map_err(|_| std::fmt::Error)?;
        f.write_str(&value)
    }
}

/// Review (API version)
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct GhReviewApi {
    /// ID.
    pub id: u64,
    /// User, missing for deleted accounts.
    pub user: Option<GhUser>,
    /// Submitted at, missing for pending reviews.
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub submitted_at: Option<OffsetDateTime>,
    /// State.
    pub state: GhReviewStateApi,
}

impl Default for GhReviewApi {
    fn default() -> Self {
        Self {
            id: 0,
            user: Some(GhUser::default()),
            submitted_at: Some(OffsetDateTime::now_utc()),
            state: GhReviewStateApi::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decode_reviews() {
        let reviews: Vec<GhReviewApi> = serde_json::from_str(
            r#"[
                {
                    "id": 80,
                    "user": {"login": "octocat"},
                    "body": "Looks good",
                    "state": "APPROVED",
                    "submitted_at": "2024-01-10T12:00:00Z"
                },
                {
                    "id": 81,
                    "user": null,
                    "state": "PENDING"
                },
                {
                    "id": 82,
                    "user": {"login": "hubot"},
                    "state": "SOMETHING_NEW",
                    "submitted_at": "2024-01-10T13:00:00Z"
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(reviews.len(), 3);
        assert_eq!(reviews[0].state, GhReviewStateApi::Approved);
        assert_eq!(reviews[0].state.to_string(), "APPROVED");
        assert_eq!(reviews[1].user, None);
        assert_eq!(reviews[1].submitted_at, None);
        assert_eq!(reviews[2].state, GhReviewStateApi::Unknown);
    }
}
