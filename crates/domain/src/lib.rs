//! Domain layer for the voice relay
//!
//! Contains the value objects and entities that flow through a single
//! request: the user's utterance, the caller-supplied provider credentials,
//! the accepted audio upload formats, and the composite text+audio reply.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
