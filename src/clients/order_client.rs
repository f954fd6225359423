use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Order, OrderCreate};
use crate::order_actor::OrderError;
use crate::repository::{OrderWriter, RepositoryError};

/// Client for interacting with the Order actor.
///
/// Only stores and reads orders; validation and stock handling live in
/// [`CreateOrderService`](crate::services::CreateOrderService).
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl_client_new!(OrderClient, Order);

impl OrderClient {
    #[instrument(skip(self))]
    pub async fn get_order(&self, id: String) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.get(id).await.map_err(RepositoryError::from)?)
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.list().await.map_err(RepositoryError::from)?)
    }
}

#[async_trait]
impl OrderWriter for OrderClient {
    #[instrument(skip(self, order), fields(customer_id = %order.customer.id, items = order.items.len()))]
    async fn create_order(&self, order: OrderCreate) -> Result<Order, RepositoryError> {
        debug!("Sending request");
        Ok(self.inner.create(order).await?)
    }
}
