//! # Order Actor
//!
//! The back-office order store. Checkout submits into it, the admin lists orders and
//! moves them through the kitchen lifecycle, and sales analytics read from it.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](cafe_actors::ActorEntity) implementation and submission validation
//! - [`error`] - [`OrderError`]
//! - [`OrderAction`] - status changes
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, client) = order_actor::new(32);
//! tokio::spawn(actor.run(Clock::system()));
//!
//! let id = client.submit_order(order_create).await?;
//! client.advance(id, OrderStatus::Preparing).await?;
//! ```

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use cafe_actors::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
