//! Product-specific domain logic, including stock level updates.

mod dtos;
pub mod entity;
pub mod error;

pub use dtos::*;
pub use error::*;
