use thiserror::Error;

use crate::repository::RepositoryError;

/// Errors returned by the order creation workflow.
///
/// The first three variants are validation failures meant to be shown to the
/// caller as-is. `Repository` carries any collaborator failure unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Customer does not exist: {0}")]
    CustomerNotFound(String),
    #[error("One or more products were not found")]
    ProductNotFound,
    #[error("Product {product_name} has only {available} units available, {requested} requested")]
    InsufficientStock {
        product_name: String,
        available: u32,
        requested: u32,
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl OrderError {
    /// True for the user-facing validation failures, false for collaborator faults.
    pub fn is_validation(&self) -> bool {
        !matches!(self, OrderError::Repository(_))
    }
}
