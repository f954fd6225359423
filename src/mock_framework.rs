//! # Mock Framework
//!
//! Utilities for testing clients and workflows in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_get`] or [`expect_update_many`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

pub type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// No `ResourceActor` runs behind the client: the test reads each request off
/// `receiver`, checks it, and answers through the included responder. This
/// drives an orchestrator step by step, with full control over what each
/// collaborator returns.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a GetMany request
pub async fn expect_get_many<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(Vec<T::Id>, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::GetMany { ids, respond_to }) => Some((ids, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateMany request
pub async fn expect_update_many<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(Vec<(T::Id, T::Patch)>, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::UpdateMany { patches, respond_to }) => Some((patches, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::CustomerClient;
    use crate::customer_actor::CustomerError;
    use crate::domain::{Customer, CustomerCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<Customer>(10);
        let client = CustomerClient::new(inner);

        let create_task = tokio::spawn(async move {
            client.create_customer(CustomerCreate::new("Test", "test@example.com")).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Test");
        responder.send(Err(FrameworkError::Rejected("duplicate".into()))).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Err(CustomerError::ValidationError("duplicate".into())));
    }
}
