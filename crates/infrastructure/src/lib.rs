//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! `ai_core` and `ai_speech` provider clients, and owns configuration
//! loading and tracing setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ServerConfig};
pub use telemetry::init_tracing;
