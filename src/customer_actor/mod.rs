//! Customer-specific domain logic: registration rules and error types.

pub mod entity;
pub mod error;

pub use error::*;
