pub mod cli;
pub mod commands;
pub mod configuration;
pub mod db;
pub mod tracing;
pub mod types;
