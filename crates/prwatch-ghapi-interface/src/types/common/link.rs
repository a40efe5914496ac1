use serde::{Deserialize, Serialize};

/// GitHub hypermedia link.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhLink {
    /// Target URL.
    pub href: String,
}

/// GitHub Pull request links.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GhPullRequestLinks {
    /// API URL of the pull request itself.
    #[serde(rename = "self")]
    pub self_link: GhLink,
    /// Web URL.
    pub html: Option<GhLink>,
}
