//! # Mock Framework
//!
//! Utilities for testing clients without spawning real actors.
//!
//! Two styles are available:
//!
//! - [`MockClient`]: queue expectations fluently, hand the client to the code
//!   under test, then [`verify`](MockClient::verify) that everything queued
//!   was consumed. This is the right tool for testing entities whose hooks
//!   call other actors (the quote actor's pricing pass, for instance).
//! - [`create_mock_client`] plus the `expect_*` helpers: a raw channel you
//!   inspect by hand, when a test needs to answer requests out of band.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// An expected request and the canned response to give it.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        response: Result<T, FrameworkError>,
    },
    Delete {
        response: Result<(), FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock client with an ordered expectation queue.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Product>::new();
/// mock.expect_get().return_ok(Some(tile));
/// mock.expect_create().return_ok("product_2".to_string());
///
/// let client = mock.client();
/// // ...exercise the code under test...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock client with an empty expectation queue.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_task = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_task.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Get { respond_to, .. },
                        Some(Expectation::Get { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::List { respond_to },
                        Some(Expectation::List { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Delete { respond_to, .. },
                        Some(Expectation::Delete { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("request did not match the next queued expectation");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// The client to hand to the code under test.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Get { response }),
        }
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::List { response }),
        }
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Create { response }),
        }
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Update { response }),
        }
    }

    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, ()> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Delete { response }),
        }
    }

    pub fn expect_action(&mut self) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap: Box::new(|response| Expectation::Action { response }),
        }
    }

    /// Panics if any queued expectation was never consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("not all expectations were met; {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Queues one canned response; shared by every `expect_*` method.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T>>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        let expectation = (self.wrap)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.wrap)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client plus the receiver its requests land on, for tests
/// that want to answer requests by hand (simulate delays, inspect payloads).
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Receives the next request and asserts it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::CreateParams,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Receives the next request and asserts it is a Get.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Receives the next request and asserts it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Product, ProductCreate};

    fn tile(id: &str) -> Product {
        Product {
            id: id.to_string(),
            code: "POR-GR-60".to_string(),
            name: "Grey porcelain 60x60".to_string(),
            category: Category::PorcelainTile,
            brand: "Celima".to_string(),
            color: Some("grey".to_string()),
            price: 45.0,
            stock: 80,
            coverage_m2_per_box: Some(1.44),
            image_urls: vec![],
        }
    }

    fn tile_create() -> ProductCreate {
        let p = tile("unused");
        ProductCreate {
            code: p.code,
            name: p.name,
            category: p.category,
            brand: p.brand,
            color: p.color,
            price: p.price,
            stock: p.stock,
            coverage_m2_per_box: p.coverage_m2_per_box,
            image_urls: p.image_urls,
        }
    }

    #[tokio::test]
    async fn raw_channel_round_trip() {
        let (client, mut receiver) = create_mock_client::<Product>(10);

        let create_task = tokio::spawn(async move { client.create(tile_create()).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("expected a Create request");
        assert_eq!(payload.code, "POR-GR-60");
        responder.send(Ok("product_1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("product_1".to_string()));
    }

    #[tokio::test]
    async fn expectation_queue_round_trip() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_create().return_ok("product_1".to_string());
        mock.expect_get().return_ok(Some(tile("product_1")));
        mock.expect_list().return_ok(vec![tile("product_1")]);

        let client = mock.client();

        let id = client.create(tile_create()).await.unwrap();
        assert_eq!(id, "product_1");

        let fetched = client.get("product_1".to_string()).await.unwrap();
        assert_eq!(fetched.unwrap().brand, "Celima");

        let all = client.list().await.unwrap();
        assert_eq!(all.len(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn canned_errors_come_back_as_is() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get()
            .return_err(FrameworkError::NotFound("product_9".to_string()));

        let client = mock.client();
        let err = client.get("product_9".to_string()).await.unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("product_9".to_string()));

        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "not all expectations were met")]
    async fn verify_flags_unconsumed_expectations() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get().return_ok(None);
        mock.verify();
    }
}
