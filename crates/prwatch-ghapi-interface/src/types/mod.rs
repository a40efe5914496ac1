mod common;
mod pulls;
mod statuses;

pub use common::*;
pub use pulls::*;
pub use statuses::*;
