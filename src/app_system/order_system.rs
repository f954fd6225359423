use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::app_config::AppConfig;
use crate::domain::{CreateOrderRequest, Customer, Order, Product};
use crate::order_actor::OrderError;
use crate::services::CreateOrderService;
use super::SystemError;

pub type ActorOrderService = CreateOrderService<CustomerClient, ProductClient, OrderClient>;

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them into the order
/// workflow, and handling shutdown.
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    order_service: ActorOrderService,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    }
}

impl OrderSystem {
    /// Spawns the actors; must be called from within a tokio runtime.
    pub fn new(config: &AppConfig) -> Self {
        info!(channel_buffer = config.channel_buffer, "Starting order system");

        let (customer_actor, customer_resource_client) =
            ResourceActor::<Customer>::new(config.channel_buffer, sequential_ids("customer"));
        let customer_client = CustomerClient::new(customer_resource_client);
        let customer_handle = tokio::spawn(customer_actor.run());

        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(config.channel_buffer, sequential_ids("product"));
        let product_client = ProductClient::new(product_resource_client);
        let product_handle = tokio::spawn(product_actor.run());

        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.channel_buffer, sequential_ids("order"));
        let order_client = OrderClient::new(order_resource_client);
        let order_handle = tokio::spawn(order_actor.run());

        let order_service = CreateOrderService::new(
            customer_client.clone(),
            product_client.clone(),
            order_client.clone(),
        );

        Self {
            customer_client,
            product_client,
            order_client,
            order_service,
            handles: vec![customer_handle, product_handle, order_handle],
        }
    }

    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        self.order_service.execute(request).await
    }

    pub fn order_service(&self) -> &ActorOrderService {
        &self.order_service
    }

    /// Drops every client, which closes the actor channels, then waits for the
    /// actor tasks to finish.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        let Self {
            customer_client,
            product_client,
            order_client,
            order_service,
            handles,
        } = self;
        drop(order_service);
        drop(customer_client);
        drop(product_client);
        drop(order_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
