//! # Mock Framework
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered from a
//! queue of scripted expectations instead of a running actor. Use it to test the logic that
//! sits *around* a client (error translation, response shaping) without spawning actors.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, scripted replies | Real store |
//! | **Determinism** | Full | Subject to scheduler |
//! | **Error Injection** | Easy (`return_err`) | Needs specific state |
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Item { id: u64 }
//! #[derive(Debug)] struct ItemCreate;
//! #[derive(Debug)] enum ItemAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct ItemError;
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = u64; type Create = ItemCreate; type Filter = ();
//!     type Action = ItemAction; type ActionResult = (); type Context = (); type Error = ItemError;
//!     fn from_create_params(id: u64, _: ItemCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn handle_action(&mut self, _: ItemAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Item>::new();
//!     let client = mock.client();
//!
//!     // Simulate a downstream failure
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATIONS
// =============================================================================

/// One scripted request and the reply to send back for it.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Find {
        response: Result<Vec<T>, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

struct Script<T: ActorEntity> {
    pending: VecDeque<Expectation<T>>,
    failures: Vec<String>,
}

type SharedScript<T> = Arc<Mutex<Script<T>>>;

fn reply<R>(respond_to: oneshot::Sender<Result<R, FrameworkError>>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations in the order they were registered. A request
/// of the wrong kind, or for a different id, is recorded as a failure and its reply channel
/// is dropped (the caller sees [`FrameworkError::ActorDropped`]). [`verify`](MockClient::verify)
/// panics if any failure was recorded or any expectation is left over.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    script: SharedScript<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let script: SharedScript<T> = Arc::new(Mutex::new(Script {
            pending: VecDeque::new(),
            failures: Vec::new(),
        }));
        let shared = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut script = shared.lock().unwrap();
                let expectation = script.pending.pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
                        if id == want =>
                    {
                        reply(respond_to, response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        reply(respond_to, response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        reply(respond_to, response);
                    }
                    (ResourceRequest::Find { respond_to, .. }, Some(Expectation::Find { response })) => {
                        reply(respond_to, response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response }))
                        if id == want =>
                    {
                        reply(respond_to, response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) if id == want => {
                        reply(respond_to, response);
                    }
                    (request, expectation) => {
                        let failure = format!(
                            "unexpected {} request (expected {})",
                            request_kind(&request),
                            expectation.as_ref().map_or("nothing", expectation_kind),
                        );
                        script.failures.push(failure);
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn expect<R: 'static>(
        &mut self,
        wrap: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            script: self.script.clone(),
            wrap: Box::new(wrap),
        }
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.expect(move |response| Expectation::Get { id, response })
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.expect(|response| Expectation::Create { response })
    }

    /// Expects a `list`.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.expect(|response| Expectation::List { response })
    }

    /// Expects a `find` (any filter).
    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.expect(|response| Expectation::Find { response })
    }

    /// Expects a `delete` of `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.expect(move |response| Expectation::Delete { id, response })
    }

    /// Expects an action against `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.expect(move |response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let script = self.script.lock().unwrap();
        if !script.failures.is_empty() {
            panic!("Mock received unexpected requests: {:?}", script.failures);
        }
        if !script.pending.is_empty() {
            panic!("Not all expectations were met. {} remaining", script.pending.len());
        }
    }
}

/// Builder that finishes an expectation with its scripted reply.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    script: SharedScript<T>,
    wrap: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Replies with `value`.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Replies with `error`.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.wrap)(response);
        self.script.lock().unwrap().pending.push_back(expectation);
    }
}

fn request_kind<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::List { .. } => "List",
        ResourceRequest::Find { .. } => "Find",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::Action { .. } => "Action",
    }
}

fn expectation_kind<T: ActorEntity>(expectation: &Expectation<T>) -> &'static str {
    match expectation {
        Expectation::Get { .. } => "Get",
        Expectation::Create { .. } => "Create",
        Expectation::List { .. } => "List",
        Expectation::Find { .. } => "Find",
        Expectation::Delete { .. } => "Delete",
        Expectation::Action { .. } => "Action",
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// Lower level than [`MockClient`]: the test pulls requests off `receiver` itself, inspects
/// their payloads and answers through the contained reply channel.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Waits for the next request and returns it if it is a Find.
pub async fn expect_find<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, oneshot::Sender<Result<Vec<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: u64,
        title: String,
    }

    #[derive(Debug)]
    struct TicketCreate {
        title: String,
    }

    #[derive(Debug)]
    enum TicketAction {
        Close,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Ticket error")]
    struct TicketError;

    #[async_trait]
    impl ActorEntity for Ticket {
        type Id = u64;
        type Create = TicketCreate;
        type Filter = String;
        type Action = TicketAction;
        type ActionResult = bool;
        type Context = ();
        type Error = TicketError;

        fn from_create_params(id: u64, params: TicketCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                title: params.title,
            })
        }

        fn matches(&self, filter: &String) -> bool {
            self.title.contains(filter.as_str())
        }

        async fn handle_action(
            &mut self,
            _action: TicketAction,
            _ctx: &Self::Context,
        ) -> Result<bool, Self::Error> {
            Ok(true)
        }
    }

    fn ticket(id: u64, title: &str) -> Ticket {
        Ticket {
            id,
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_channel_create() {
        let (client, mut receiver) = create_mock_client::<Ticket>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(TicketCreate {
                    title: "Broken zipper".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.title, "Broken zipper");
        responder.send(Ok(ticket(1, "Broken zipper"))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_raw_channel_find_passes_filter_through() {
        let (client, mut receiver) = create_mock_client::<Ticket>(10);

        let find_task = tokio::spawn(async move { client.find("zip".to_string()).await });

        let (filter, responder) = expect_find(&mut receiver).await.expect("Expected Find request");
        assert_eq!(filter, "zip");
        responder.send(Ok(vec![ticket(3, "zip")])).unwrap();

        assert_eq!(find_task.await.unwrap().unwrap(), vec![ticket(3, "zip")]);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Ticket>::new();
        mock.expect_create().return_ok(ticket(1, "Late parcel"));
        mock.expect_list().return_ok(vec![ticket(1, "Late parcel")]);
        mock.expect_action(1).return_ok(true);
        mock.expect_delete(1).return_err(FrameworkError::NotFound("1".to_string()));

        let client = mock.client();

        let created = client
            .create(TicketCreate {
                title: "Late parcel".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.title, "Late parcel");
        assert_eq!(client.list().await.unwrap().len(), 1);
        assert!(client.perform_action(1, TicketAction::Close).await.unwrap());
        assert!(matches!(
            client.delete(1).await,
            Err(FrameworkError::NotFound(id)) if id == "1"
        ));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_records_mismatched_id() {
        let mut mock = MockClient::<Ticket>::new();
        mock.expect_get(7).return_ok(None);

        let result = mock.client().get(8).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verified = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verified.is_err());
    }
}
