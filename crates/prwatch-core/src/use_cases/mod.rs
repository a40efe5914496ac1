pub mod alerts;
pub mod pulls;
