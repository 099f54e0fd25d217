//! Data models for the career ladder application.
//!
//! Field names serialize in camelCase to match the browser client.

mod revision;
mod week;

pub use revision::*;
pub use week::*;
