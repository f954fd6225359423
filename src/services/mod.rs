//! Business workflows built on top of the collaborator traits.

mod create_order;

pub use create_order::CreateOrderService;
