mod branch;
mod link;
mod user;

pub use branch::GhBranch;
pub use link::{GhLink, GhPullRequestLinks};
pub use user::GhUser;
