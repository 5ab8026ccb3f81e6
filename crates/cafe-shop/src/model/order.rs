//! Customer orders as the back-office stores them.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](cafe_actors::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](cafe_actors::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Status changes ([`OrderAction`](crate::order_actor::OrderAction))
//! - List filtering ([`OrderFilter`])
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FulfillmentMode {
    #[default]
    Pickup,
    Delivery,
}

impl Display for FulfillmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            FulfillmentMode::Pickup => "pickup",
            FulfillmentMode::Delivery => "delivery",
        })
    }
}

/// Kitchen-side progress of an order.
///
/// `pending → preparing → ready → completed`, or `pending → cancelled`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Whether the admin may move an order from `self` to `next`.
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Preparing)
                | (Preparing, Ready)
                | (Ready, Completed)
                | (Pending, Cancelled)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a submitted order, frozen at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
    pub category: String,
}

impl OrderItem {
    /// Price × quantity, saturating at `Decimal::MAX`.
    pub fn line_total(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }
}

/// Σ line totals, saturating at `Decimal::MAX`.
pub fn items_total(items: &[OrderItem]) -> Decimal {
    items
        .iter()
        .fold(Decimal::ZERO, |sum, item| sum.saturating_add(item.line_total()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub order_type: FulfillmentMode,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for submitting a new order.
///
/// Field names match the hosted store's columns, so this serializes to the
/// same JSON the storefront used to send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub order_type: FulfillmentMode,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    #[serde(default)]
    pub status: OrderStatus,
}

/// Criteria for listing orders. The default lists everything.
///
/// The placement window is half-open: `placed_from <= created_at < placed_until`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub placed_from: Option<DateTime<Utc>>,
    pub placed_until: Option<DateTime<Utc>>,
}

impl OrderFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(status: OrderStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn placed_between(mut self, from: DateTime<Utc>, until: DateTime<Utc>) -> Self {
        self.placed_from = Some(from);
        self.placed_until = Some(until);
        self
    }
}

/// Orders per status, for the admin tab badges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    pub fn tally<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut counts = Self::default();
        for order in orders {
            *counts.slot(order.status) += 1;
        }
        counts
    }

    pub fn get(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Preparing => self.preparing,
            OrderStatus::Ready => self.ready,
            OrderStatus::Completed => self.completed,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    pub fn total(&self) -> usize {
        OrderStatus::ALL.iter().map(|&status| self.get(status)).sum()
    }

    fn slot(&mut self, status: OrderStatus) -> &mut usize {
        match status {
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Preparing => &mut self.preparing,
            OrderStatus::Ready => &mut self.ready,
            OrderStatus::Completed => &mut self.completed,
            OrderStatus::Cancelled => &mut self.cancelled,
        }
    }
}

impl Order {
    /// Builds a pending order from a submission, stamped with `now`.
    pub fn new(id: OrderId, params: OrderCreate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: params.customer_name,
            customer_phone: params.customer_phone,
            customer_email: params.customer_email,
            items: params.items,
            total_amount: params.total_amount,
            order_type: params.order_type,
            delivery_address: params.delivery_address,
            notes: params.notes,
            status: params.status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
