pub mod config;
pub mod graph;
pub mod loader;
pub mod reports;
pub mod types;
