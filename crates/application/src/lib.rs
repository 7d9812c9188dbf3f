//! Application layer - Use cases and orchestration
//!
//! Contains the request flows of the relay and the ports they call.
//! Adapters in the infrastructure layer implement the ports on top of the
//! provider clients.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
