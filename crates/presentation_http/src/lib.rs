//! Voice relay HTTP presentation layer
//!
//! Exposes the relay's use cases over HTTP: a liveness probe, audio
//! transcription and the text-to-spoken-reply flow.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{cors_layer, create_app, create_router};
pub use state::AppState;
