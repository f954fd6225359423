//! Order persistence rules and the errors of the order creation workflow.

pub mod entity;
pub mod error;

pub use error::*;
