//! # Cafe Shop
//!
//! The café's ordering core: the session [`cart`], the [`checkout`] flow that turns it
//! into an order, and the back-office stores behind it.
//!
//! - **[model]**: plain records ([`Order`](model::Order), [`Enrollment`](model::Enrollment),
//!   [`Employee`](model::Employee), ...) and the house [`Menu`](model::Menu)
//! - **[clients]**: typed handles onto each store
//! - **[analytics]**: sales figures and the dashboard overview
//! - **[lifecycle]**: [`CafeSystem`](lifecycle::CafeSystem), which starts and stops the stores
//!
//! See `cafe_actors::mock` for testing clients without running actors.

pub mod analytics;
pub mod cart;
pub mod checkout;
pub mod clients;
pub mod clock;
pub mod config;
pub mod enrollment_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod staff_actor;
