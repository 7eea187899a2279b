//! # Activity Shared
//!
//! Shared configuration, constants, and telemetry for the activity tracker.

pub mod config;
pub mod constants;
pub mod telemetry;

pub use config::AppConfig;
