//! Domain entities

pub mod composite_reply;

pub use composite_reply::CompositeReply;
