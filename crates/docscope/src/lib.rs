pub mod complexity;
pub mod config;
pub mod error;
pub mod telemetry;
