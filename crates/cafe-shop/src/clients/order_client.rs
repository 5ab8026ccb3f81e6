//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor: submission from
//! checkout, and the admin's listing and status changes.
use crate::checkout::OrderSubmitter;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderStatus, StatusCounts};
use crate::order_actor::{OrderAction, OrderError};
use async_trait::async_trait;
use cafe_actors::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Submission validation happens in the actor (`Order::from_create_params`); typed
/// [`OrderError`]s raised there come back unchanged through [`ActorClient::map_error`].
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(customer = %params.customer_name))]
    pub async fn submit_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order stored");
        Ok(id)
    }

    /// Orders with the given status (or all of them), newest first.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, OrderError> {
        let filter = OrderFilter {
            status,
            ..OrderFilter::default()
        };
        self.list_newest_first(filter).await
    }

    /// Orders matching `filter`, newest first.
    pub async fn list_newest_first(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list(filter).await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub async fn status_counts(&self) -> Result<StatusCounts, OrderError> {
        let orders = self.list(OrderFilter::all()).await?;
        Ok(StatusCounts::tally(&orders))
    }

    /// Moves an order to `status`, returning the status it left.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderId, status: OrderStatus) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        let previous = self
            .inner
            .perform_action(id, OrderAction::SetStatus(status))
            .await
            .map_err(Self::map_error)?;
        info!(order_id = %id, from = %previous, to = %status, "Order status changed");
        Ok(previous)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl OrderSubmitter for OrderClient {
    async fn submit_order(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        OrderClient::submit_order(self, order).await
    }
}
