use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::domain::{Product, ProductCreate, StockUpdate};
use crate::product_actor::{ProductError, ProductPatch};
use crate::repository::{ProductLookup, RepositoryError, StockUpdater};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductError, product);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Rejected(reason) => ProductError::ValidationError(reason),
            other => ProductError::ActorCommunicationError(other.to_string()),
        })
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: String) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self.inner.get(id.clone()).await {
            Ok(Some(product)) => Ok(product.quantity),
            Ok(None) => Err(ProductError::NotFound(id)),
            Err(e) => Err(ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[async_trait]
impl ProductLookup for ProductClient {
    #[instrument(skip(self), fields(count = ids.len()))]
    async fn find_all_products_by_id(&self, ids: &[String]) -> Result<Vec<Product>, RepositoryError> {
        debug!("Sending request");
        Ok(self.inner.get_many(ids.to_vec()).await?)
    }
}

#[async_trait]
impl StockUpdater for ProductClient {
    #[instrument(skip(self, updates), fields(count = updates.len()))]
    async fn update_product_quantities(&self, updates: Vec<StockUpdate>) -> Result<(), RepositoryError> {
        debug!("Sending request");
        let patches = updates
            .into_iter()
            .map(|update| (update.id, ProductPatch::quantity(update.quantity)))
            .collect();
        self.inner.update_many(patches).await?;
        Ok(())
    }
}
