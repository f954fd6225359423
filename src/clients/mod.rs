//! Typed handles over the resource actors.
//!
//! Each client wraps a [`ResourceClient`](crate::actor_framework::ResourceClient),
//! adds entity-specific operations with `#[instrument]` spans, and implements
//! the collaborator traits from [`crate::repository`].

#[macro_use]
mod macros;

mod customer_client;
mod product_client;
mod order_client;

pub use customer_client::CustomerClient;
pub use product_client::ProductClient;
pub use order_client::OrderClient;
