use async_trait::async_trait;
use cafe_actors::mock::MockClient;
use cafe_actors::FrameworkError;
use cafe_shop::cart::{Cart, CartItem};
use cafe_shop::checkout::{CheckoutError, CheckoutFlow, CheckoutStage, DraftError, OrderSubmitter};
use cafe_shop::clients::OrderClient;
use cafe_shop::model::{FulfillmentMode, Order, OrderCreate, OrderId, OrderStatus};
use cafe_shop::order_actor::OrderError;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn cart_with_espresso_and_lattes() -> Cart {
    let mut cart = Cart::new();
    let espresso = CartItem::new("Espresso", Decimal::from(250), "coffee", "").unwrap();
    let latte = CartItem::new("Latte", Decimal::from(350), "coffee", "").unwrap();
    cart.add_item(espresso);
    cart.add_item(latte.clone());
    cart.add_item(latte);
    cart
}

fn fill(flow: &mut CheckoutFlow<impl OrderSubmitter>) {
    let draft = flow.draft_mut();
    draft.customer_name = "Rahim".into();
    draft.customer_phone = "01700000000".into();
}

/// Records every submission and answers with sequential ids.
#[derive(Clone, Default)]
struct RecordingSubmitter {
    seen: Arc<Mutex<Vec<OrderCreate>>>,
}

#[async_trait]
impl OrderSubmitter for RecordingSubmitter {
    async fn submit_order(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        let mut seen = self.seen.lock().unwrap();
        seen.push(order);
        Ok(OrderId(seen.len() as u32))
    }
}

/// Never answers.
struct StalledSubmitter;

#[async_trait]
impl OrderSubmitter for StalledSubmitter {
    async fn submit_order(&self, _order: OrderCreate) -> Result<OrderId, OrderError> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn submission_carries_the_cart_snapshot() {
    let submitter = RecordingSubmitter::default();
    let mut flow = CheckoutFlow::new(submitter.clone());
    let mut cart = cart_with_espresso_and_lattes();

    flow.review(&cart).unwrap();
    fill(&mut flow);
    flow.draft_mut().notes = "Less sugar".into();

    let id = flow.submit(&mut cart).await.unwrap();
    assert_eq!(id, OrderId(1));
    assert_eq!(flow.stage(), &CheckoutStage::Success(id));
    assert!(cart.is_empty());

    let seen = submitter.seen.lock().unwrap();
    let order = &seen[0];
    assert_eq!(order.total_amount, Decimal::from(950));
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.order_type, FulfillmentMode::Pickup);
    assert_eq!(order.notes.as_deref(), Some("Less sugar"));
    let lines: Vec<_> = order.items.iter().map(|i| (i.name.as_str(), i.quantity)).collect();
    assert_eq!(lines, [("Espresso", 1), ("Latte", 2)]);
}

#[tokio::test]
async fn placed_orders_cannot_be_resubmitted() {
    let mut flow = CheckoutFlow::new(RecordingSubmitter::default());
    let mut cart = cart_with_espresso_and_lattes();
    flow.review(&cart).unwrap();
    fill(&mut flow);
    let id = flow.submit(&mut cart).await.unwrap();

    cart.add_item(CartItem::new("Latte", Decimal::from(350), "coffee", "").unwrap());
    assert_eq!(
        flow.submit(&mut cart).await.unwrap_err(),
        CheckoutError::AlreadyPlaced(id)
    );
    assert_eq!(flow.review(&cart).unwrap_err(), CheckoutError::AlreadyPlaced(id));
    assert_eq!(cart.count(), 1);
}

#[tokio::test]
async fn empty_cart_cannot_enter_review() {
    let mut flow = CheckoutFlow::new(RecordingSubmitter::default());
    let cart = Cart::new();

    assert_eq!(flow.review(&cart).unwrap_err(), CheckoutError::EmptyCart);
    assert_eq!(flow.stage(), &CheckoutStage::Browsing);
}

#[tokio::test]
async fn submit_requires_review_first() {
    let mut flow = CheckoutFlow::new(RecordingSubmitter::default());
    let mut cart = cart_with_espresso_and_lattes();
    fill(&mut flow);

    assert_eq!(
        flow.submit(&mut cart).await.unwrap_err(),
        CheckoutError::NotReviewing("browsing")
    );

    flow.review(&cart).unwrap();
    flow.back().unwrap();
    assert_eq!(flow.stage(), &CheckoutStage::Browsing);
    assert_eq!(flow.draft().customer_name, "Rahim");
}

/// Pattern 1: client logic against a pure mock. Nothing reaches the store.
#[tokio::test]
async fn invalid_draft_never_reaches_the_store() {
    let orders = MockClient::<Order>::new();
    let mut flow = CheckoutFlow::new(OrderClient::new(orders.client()));
    let mut cart = cart_with_espresso_and_lattes();

    flow.review(&cart).unwrap();
    flow.draft_mut().customer_name = "Rahim".into();
    flow.draft_mut().order_type = FulfillmentMode::Delivery;

    assert_eq!(
        flow.submit(&mut cart).await.unwrap_err(),
        CheckoutError::Validation(DraftError::MissingPhone)
    );
    flow.draft_mut().customer_phone = "01700000000".into();
    assert_eq!(
        flow.submit(&mut cart).await.unwrap_err(),
        CheckoutError::Validation(DraftError::MissingAddress)
    );

    assert_eq!(flow.stage(), &CheckoutStage::Reviewing);
    assert_eq!(cart.count(), 3);
    orders.verify();
}

#[tokio::test]
async fn failed_submission_keeps_cart_and_can_be_retried() {
    let mut orders = MockClient::<Order>::new();
    orders.expect_create().return_err(FrameworkError::ActorClosed);
    orders.expect_create().return_ok(OrderId(5));

    let mut flow = CheckoutFlow::new(OrderClient::new(orders.client()));
    let mut cart = cart_with_espresso_and_lattes();
    flow.review(&cart).unwrap();
    fill(&mut flow);

    let err = flow.submit(&mut cart).await.unwrap_err();
    let cause = OrderError::ActorCommunicationError("Actor closed".into());
    assert_eq!(err, CheckoutError::Submission(cause.clone()));
    assert_eq!(flow.stage(), &CheckoutStage::Failed(cause));
    assert_eq!(cart.count(), 3);
    assert_eq!(cart.total(), Decimal::from(950));
    assert_eq!(flow.draft().customer_name, "Rahim");

    flow.retry().unwrap();
    assert_eq!(flow.stage(), &CheckoutStage::Reviewing);
    assert_eq!(flow.submit(&mut cart).await.unwrap(), OrderId(5));
    assert!(cart.is_empty());
    assert_eq!(flow.retry().unwrap_err(), CheckoutError::NothingToRetry);

    orders.verify();
}

#[tokio::test]
async fn store_validation_errors_come_back_typed() {
    let mut orders = MockClient::<Order>::new();
    orders
        .expect_create()
        .return_err(FrameworkError::EntityError(Box::new(OrderError::EmptyOrder)));

    let mut flow = CheckoutFlow::new(OrderClient::new(orders.client()));
    let mut cart = cart_with_espresso_and_lattes();
    flow.review(&cart).unwrap();
    fill(&mut flow);

    assert_eq!(
        flow.submit(&mut cart).await.unwrap_err(),
        CheckoutError::Submission(OrderError::EmptyOrder)
    );
    orders.verify();
}

#[tokio::test]
async fn abandoned_submission_returns_to_review() {
    let mut flow = CheckoutFlow::new(StalledSubmitter);
    let mut cart = cart_with_espresso_and_lattes();
    flow.review(&cart).unwrap();
    fill(&mut flow);

    let outcome = tokio::time::timeout(Duration::from_millis(20), flow.submit(&mut cart)).await;
    assert!(outcome.is_err(), "stalled submission should time out");

    assert_eq!(flow.stage(), &CheckoutStage::Reviewing);
    assert_eq!(cart.count(), 3);
}
