//! # Mock Clients & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered from
//! a queue of scripted expectations instead of a running actor. Code that wraps a client
//! (an `OrderClient`, a checkout flow submitting through it) can then be tested without
//! spawning the store, and failures that are awkward to provoke for real, such as a closed
//! store, are one line away.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | **State** | none, scripted replies | real records |
//! | **Determinism** | full | subject to the scheduler |
//! | **Error injection** | `return_err(..)` | needs a state that fails |
//! | **Use case** | logic *around* a client | the store itself, or the whole system |
//!
//! ## Testing Strategies
//!
//! 1. **Client logic, pure mock**: script the replies, drive the wrapper, `verify()`.
//! 2. **Single actor**: `ResourceActor::new` + `tokio::spawn(actor.run(ctx))`.
//! 3. **Actor with mocked dependencies**: a real actor whose context holds clients
//!    taken from mocks (see the attendance store tests in `cafe-shop`).
//! 4. **Full system**: every store running, driven through the public clients.
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut orders = MockClient::<Order>::new();
//! orders.expect_create().return_err(FrameworkError::ActorClosed);
//!
//! let mut flow = CheckoutFlow::new(OrderClient::new(orders.client()));
//! // ... submit, observe the Failed stage, retry ...
//! orders.verify();
//! ```
//!
//! Replies are consumed in order. A request that does not match the next expectation (wrong
//! kind or wrong id) is left unanswered, so the caller sees `ActorDropped`, and the mismatch
//! is reported by [`MockClient::verify`].
//!
//! For inspecting the raw requests instead, use [`create_mock_client`] together with
//! [`expect_create`], [`expect_get`] and [`expect_action`].

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply, queued by one of the `expect_*` builders.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
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
    mismatches: Vec<String>,
}

type Shared<T> = Arc<Mutex<Script<T>>>;

fn lock<T: ActorEntity>(script: &Shared<T>) -> MutexGuard<'_, Script<T>> {
    // A poisoned lock only means another test thread panicked; the queue is still usable.
    script.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A mock store with fluent expectation tracking.
///
/// ```rust,ignore
/// let mut mock = MockClient::<Enrollment>::new();
/// mock.expect_create().return_ok(EnrollmentId(1));
/// mock.expect_list().return_ok(vec![]);
///
/// let client = EnrollmentClient::new(mock.client());
/// // ...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    script: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let script: Shared<T> = Arc::new(Mutex::new(Script {
            pending: VecDeque::new(),
            mismatches: Vec::new(),
        }));
        let responder = script.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&responder).pending.pop_front();
                if let Err(mismatch) = answer(request, expectation) {
                    lock(&responder).mismatches.push(mismatch);
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            script,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            script: self.script.clone(),
        }
    }

    /// Expects a `list` (any filter).
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            script: self.script.clone(),
        }
    }

    /// Expects a `create`.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            script: self.script.clone(),
        }
    }

    /// Expects an `update` of `id`.
    pub fn expect_update(&mut self, id: T::Id) -> UpdateExpectationBuilder<T> {
        UpdateExpectationBuilder {
            id,
            script: self.script.clone(),
        }
    }

    /// Expects a `delete` of `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id,
            script: self.script.clone(),
        }
    }

    /// Expects an action on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            script: self.script.clone(),
        }
    }

    /// Panics if an expectation was not consumed or a request did not match.
    pub fn verify(&self) {
        let script = lock(&self.script);
        if !script.mismatches.is_empty() {
            panic!("Unexpected requests: {}", script.mismatches.join("; "));
        }
        if !script.pending.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                script.pending.len()
            );
        }
    }
}

fn check_id<I>(kind: &str, expected: &I, got: &I) -> Result<(), String>
where
    I: PartialEq + std::fmt::Display,
{
    if expected == got {
        Ok(())
    } else {
        Err(format!("{kind} for {got}, expected {expected}"))
    }
}

fn answer<T: ActorEntity>(
    request: ResourceRequest<T>,
    expectation: Option<Expectation<T>>,
) -> Result<(), String> {
    match (request, expectation) {
        (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            check_id("get", &want, &id)?;
            let _ = respond_to.send(response);
        }
        (ResourceRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => {
            check_id("update", &want, &id)?;
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) => {
            check_id("delete", &want, &id)?;
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) => {
            check_id("action", &want, &id)?;
            let _ = respond_to.send(response);
        }
        (request, None) => return Err(format!("unscripted {}", kind_of(&request))),
        (request, Some(_)) => return Err(format!("out-of-order {}", kind_of(&request))),
    }
    Ok(())
}

fn kind_of<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "create",
        ResourceRequest::Get { .. } => "get",
        ResourceRequest::List { .. } => "list",
        ResourceRequest::Update { .. } => "update",
        ResourceRequest::Delete { .. } => "delete",
        ResourceRequest::Action { .. } => "action",
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    script: Shared<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        lock(&self.script).pending.push_back(Expectation::Get {
            id: self.id,
            response,
        });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    script: Shared<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.push(Ok(items));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<T>, FrameworkError>) {
        lock(&self.script)
            .pending
            .push_back(Expectation::List { response });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    script: Shared<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.push(Ok(id));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::Id, FrameworkError>) {
        lock(&self.script)
            .pending
            .push_back(Expectation::Create { response });
    }
}

/// Builder for `update` expectations.
pub struct UpdateExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    script: Shared<T>,
}

impl<T: ActorEntity> UpdateExpectationBuilder<T> {
    pub fn return_ok(self, updated: T) {
        self.push(Ok(updated));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T, FrameworkError>) {
        lock(&self.script).pending.push_back(Expectation::Update {
            id: self.id,
            response,
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    script: Shared<T>,
}

impl<T: ActorEntity> DeleteExpectationBuilder<T> {
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), FrameworkError>) {
        lock(&self.script).pending.push_back(Expectation::Delete {
            id: self.id,
            response,
        });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    script: Shared<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        lock(&self.script).pending.push_back(Expectation::Action {
            id: self.id,
            response,
        });
    }
}

// =============================================================================
// RAW REQUEST HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls requests off `receiver`, asserts on their payload and
/// answers through the enclosed oneshot sender, which makes delays and odd replies easy to
/// stage.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request, if it is a Create.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next request, if it is a Get.
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

/// Next request, if it is an Action.
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
