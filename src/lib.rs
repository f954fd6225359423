//! # Order Service
//!
//! Order creation for an e-commerce backend: validate a request against
//! customer and product state, decrement stock, and persist the order.
//!
//! ## Layout
//!
//! - **Domain types** - plain data: [`Customer`], [`Product`], [`Order`], [`StockUpdate`]
//! - **Collaborator traits** - what the workflow needs from storage → [`repository`]
//! - **Workflow** - the validate-then-commit sequence → [`CreateOrderService`]
//! - **Resource actors** - a generic in-memory store per entity → [`actor_framework`]
//! - **Clients** - typed actor handles implementing the collaborator traits → [`clients`]
//! - **System coordinator** - startup, wiring and shutdown → [`OrderSystem`]
//!
//! ## Example
//!
//! ```no_run
//! use order_service::{AppConfig, CreateOrderRequest, CustomerCreate, OrderSystem, ProductCreate, RequestedItem};
//! use rust_decimal::Decimal;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let system = OrderSystem::new(&AppConfig::default());
//! let customer = system.customer_client.create_customer(CustomerCreate::new("Alice", "alice@example.com")).await?;
//! let product = system.product_client.create_product(ProductCreate::new("Mouse", Decimal::from(10), 5)).await?;
//!
//! let order = system
//!     .create_order(CreateOrderRequest {
//!         customer_id: customer.id,
//!         products: vec![RequestedItem::new(product.id, 3)],
//!     })
//!     .await?;
//! assert_eq!(order.items[0].quantity, 3);
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_config;
pub mod app_system;
pub mod clients;
pub mod customer_actor;
pub mod domain;
pub mod order_actor;
pub mod product_actor;
pub mod repository;
pub mod services;

#[cfg(test)]
mod mock_framework;

pub use app_config::{AppConfig, LogFormat};
pub use app_system::{setup_tracing, OrderSystem, SystemError};
pub use domain::*;
pub use order_actor::OrderError;
pub use services::CreateOrderService;
