pub mod config;
pub mod phase;
pub mod plan;
pub mod summary;
