//! CLI command implementations

pub mod check;
pub mod config;
pub mod review;

pub use config::ConfigArgs;
pub use review::ReviewArgs;
