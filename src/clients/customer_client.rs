use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::customer_actor::CustomerError;
use crate::domain::{Customer, CustomerCreate};
use crate::repository::{CustomerLookup, RepositoryError};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl_basic_client!(CustomerClient, Customer, CustomerError, customer);

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn create_customer(&self, params: CustomerCreate) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Rejected(reason) => CustomerError::ValidationError(reason),
            other => CustomerError::ActorCommunicationError(other.to_string()),
        })
    }
}

#[async_trait]
impl CustomerLookup for CustomerClient {
    #[instrument(skip(self))]
    async fn find_customer_by_id(&self, id: &str) -> Result<Option<Customer>, RepositoryError> {
        debug!("Sending request");
        Ok(self.inner.get(id.to_string()).await?)
    }
}
