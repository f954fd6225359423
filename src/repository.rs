//! Collaborator interfaces consumed by the order creation workflow.
//!
//! Storage is pluggable: the workflow only sees these traits. The in-process
//! actor clients in [`crate::clients`] are one implementation.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::{Customer, Order, OrderCreate, Product, StockUpdate};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepositoryError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Write rejected: {0}")]
    Rejected(String),
}

impl From<FrameworkError> for RepositoryError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::ActorClosed | FrameworkError::ActorDropped => {
                RepositoryError::Unavailable(error.to_string())
            }
            FrameworkError::NotFound(id) => RepositoryError::NotFound(id),
            FrameworkError::Rejected(reason) => RepositoryError::Rejected(reason),
        }
    }
}

#[async_trait]
pub trait CustomerLookup: Send + Sync {
    async fn find_customer_by_id(&self, id: &str) -> Result<Option<Customer>, RepositoryError>;
}

#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Returns only the products that exist. Missing ids are not an error;
    /// callers compare counts.
    async fn find_all_products_by_id(&self, ids: &[String]) -> Result<Vec<Product>, RepositoryError>;
}

#[async_trait]
pub trait StockUpdater: Send + Sync {
    async fn update_product_quantities(&self, updates: Vec<StockUpdate>) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait OrderWriter: Send + Sync {
    async fn create_order(&self, order: OrderCreate) -> Result<Order, RepositoryError>;
}

#[async_trait]
impl<T: CustomerLookup + ?Sized> CustomerLookup for Arc<T> {
    async fn find_customer_by_id(&self, id: &str) -> Result<Option<Customer>, RepositoryError> {
        (**self).find_customer_by_id(id).await
    }
}

#[async_trait]
impl<T: ProductLookup + ?Sized> ProductLookup for Arc<T> {
    async fn find_all_products_by_id(&self, ids: &[String]) -> Result<Vec<Product>, RepositoryError> {
        (**self).find_all_products_by_id(ids).await
    }
}

#[async_trait]
impl<T: StockUpdater + ?Sized> StockUpdater for Arc<T> {
    async fn update_product_quantities(&self, updates: Vec<StockUpdate>) -> Result<(), RepositoryError> {
        (**self).update_product_quantities(updates).await
    }
}

#[async_trait]
impl<T: OrderWriter + ?Sized> OrderWriter for Arc<T> {
    async fn create_order(&self, order: OrderCreate) -> Result<Order, RepositoryError> {
        (**self).create_order(order).await
    }
}
