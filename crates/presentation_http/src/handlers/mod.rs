//! HTTP request handlers

pub mod health;
pub mod process_text;
pub mod transcribe;
