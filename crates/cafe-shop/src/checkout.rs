//! # Checkout
//!
//! Turns the cart and the customer's details into a submitted order.
//!
//! ```text
//! Browsing ──review──▶ Reviewing ──submit──▶ Submitting ──ok──▶ Success
//!     ▲                  │    ▲                   │
//!     └──────back────────┘    └──────retry────── Failed ◀──err──┘
//! ```
//!
//! [`CheckoutFlow::submit`] takes the cart by `&mut` for the whole submission, so the
//! cart cannot change while its snapshot is in flight, and the flow itself is borrowed
//! mutably so a second submission cannot start alongside the first. If the submission
//! future is dropped before it settles, the flow falls back to `Reviewing` with the cart
//! untouched.

use crate::cart::Cart;
use crate::model::{FulfillmentMode, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Where checkout sends the finished order.
#[async_trait]
pub trait OrderSubmitter: Send + Sync {
    async fn submit_order(&self, order: OrderCreate) -> Result<OrderId, OrderError>;
}

/// The customer's half of the checkout form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutDraft {
    pub customer_name: String,
    pub customer_phone: String,
    /// Optional; blank means none.
    pub customer_email: String,
    pub order_type: FulfillmentMode,
    /// Only read for delivery orders.
    pub delivery_address: String,
    pub notes: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    #[error("Name is required")]
    MissingName,

    #[error("Phone number is required")]
    MissingPhone,

    #[error("Delivery address is required for delivery orders")]
    MissingAddress,

    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

impl CheckoutDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.customer_name.trim().is_empty() {
            return Err(DraftError::MissingName);
        }
        if self.customer_phone.trim().is_empty() {
            return Err(DraftError::MissingPhone);
        }
        if self.order_type == FulfillmentMode::Delivery && self.delivery_address.trim().is_empty()
        {
            return Err(DraftError::MissingAddress);
        }
        let email = self.customer_email.trim();
        if !email.is_empty() && !email.contains('@') {
            return Err(DraftError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    /// The submission for this draft and `cart`. Does not validate.
    pub fn to_order(&self, cart: &Cart) -> OrderCreate {
        let snapshot = cart.snapshot();
        OrderCreate {
            customer_name: self.customer_name.trim().to_string(),
            customer_phone: self.customer_phone.trim().to_string(),
            customer_email: non_blank(&self.customer_email),
            order_type: self.order_type,
            delivery_address: match self.order_type {
                FulfillmentMode::Delivery => non_blank(&self.delivery_address),
                FulfillmentMode::Pickup => None,
            },
            notes: non_blank(&self.notes),
            items: snapshot.items,
            total_amount: snapshot.total,
            status: OrderStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutStage {
    Browsing,
    Reviewing,
    Submitting,
    Success(OrderId),
    /// The last submission failed; the draft and cart are as they were.
    Failed(OrderError),
}

impl CheckoutStage {
    fn name(&self) -> &'static str {
        match self {
            CheckoutStage::Browsing => "browsing",
            CheckoutStage::Reviewing => "reviewing",
            CheckoutStage::Submitting => "submitting",
            CheckoutStage::Success(_) => "success",
            CheckoutStage::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error(transparent)]
    Validation(#[from] DraftError),

    #[error("Cart is empty")]
    EmptyCart,

    /// `submit` was called before `review`.
    #[error("Checkout is {0}, not reviewing")]
    NotReviewing(&'static str),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Order {0} has already been placed")]
    AlreadyPlaced(OrderId),

    /// `retry` was called without a failed submission.
    #[error("Nothing to retry")]
    NothingToRetry,

    /// The order store refused or could not be reached. Retryable.
    #[error("Order submission failed: {0}")]
    Submission(#[from] OrderError),
}

/// Resets the stage if the submission future is dropped mid-flight.
struct InFlight<'a> {
    stage: &'a mut CheckoutStage,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn start(stage: &'a mut CheckoutStage) -> Self {
        *stage = CheckoutStage::Submitting;
        Self {
            stage,
            settled: false,
        }
    }

    fn settle(mut self, next: CheckoutStage) {
        *self.stage = next;
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("Submission abandoned before completion");
            *self.stage = CheckoutStage::Reviewing;
        }
    }
}

/// One customer's pass through checkout.
pub struct CheckoutFlow<S> {
    submitter: S,
    draft: CheckoutDraft,
    stage: CheckoutStage,
}

impl<S: OrderSubmitter> CheckoutFlow<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            submitter,
            draft: CheckoutDraft::default(),
            stage: CheckoutStage::Browsing,
        }
    }

    pub fn stage(&self) -> &CheckoutStage {
        &self.stage
    }

    pub fn draft(&self) -> &CheckoutDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut CheckoutDraft {
        &mut self.draft
    }

    /// Opens the review step. Refused for an empty cart.
    pub fn review(&mut self, cart: &Cart) -> Result<(), CheckoutError> {
        match &self.stage {
            CheckoutStage::Success(id) => return Err(CheckoutError::AlreadyPlaced(*id)),
            CheckoutStage::Submitting => return Err(CheckoutError::SubmissionInFlight),
            _ => {}
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.stage = CheckoutStage::Reviewing;
        Ok(())
    }

    /// Leaves review and returns to browsing. The draft is kept.
    pub fn back(&mut self) -> Result<(), CheckoutError> {
        match &self.stage {
            CheckoutStage::Success(id) => Err(CheckoutError::AlreadyPlaced(*id)),
            CheckoutStage::Submitting => Err(CheckoutError::SubmissionInFlight),
            _ => {
                self.stage = CheckoutStage::Browsing;
                Ok(())
            }
        }
    }

    /// Returns a failed checkout to review.
    pub fn retry(&mut self) -> Result<(), CheckoutError> {
        match &self.stage {
            CheckoutStage::Failed(_) => {
                self.stage = CheckoutStage::Reviewing;
                Ok(())
            }
            _ => Err(CheckoutError::NothingToRetry),
        }
    }

    /// Validates the draft, submits `{draft, cart snapshot, total}` and clears the cart
    /// on success. On failure the cart and draft are left as they were.
    #[instrument(name = "checkout", skip_all, fields(stage = self.stage.name()))]
    pub async fn submit(&mut self, cart: &mut Cart) -> Result<OrderId, CheckoutError> {
        match &self.stage {
            CheckoutStage::Reviewing | CheckoutStage::Failed(_) => {}
            CheckoutStage::Submitting => return Err(CheckoutError::SubmissionInFlight),
            CheckoutStage::Success(id) => return Err(CheckoutError::AlreadyPlaced(*id)),
            other => return Err(CheckoutError::NotReviewing(other.name())),
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.draft.validate()?;

        let order = self.draft.to_order(cart);
        let total = order.total_amount;
        let in_flight = InFlight::start(&mut self.stage);

        match self.submitter.submit_order(order).await {
            Ok(id) => {
                cart.clear();
                in_flight.settle(CheckoutStage::Success(id));
                info!(order_id = %id, %total, "Order placed");
                Ok(id)
            }
            Err(err) => {
                warn!(error = %err, "Order submission failed");
                in_flight.settle(CheckoutStage::Failed(err.clone()));
                Err(CheckoutError::Submission(err))
            }
        }
    }
}
