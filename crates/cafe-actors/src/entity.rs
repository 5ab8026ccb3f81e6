//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored record (an order, an enrollment, an
//! employee, an attendance record) implements so that a generic [`ResourceActor`](crate::ResourceActor)
//! can own it. The associated types pin down the id, the create/update payloads, the custom
//! actions and the list filter, so a payload for one store can never be sent to another.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::matches`]
//! - [`ActorEntity::same_slot`] / [`ActorEntity::absorb`]
//!
//! The defaults accept everything (`Ok(())` / `true`) and treat every record as distinct.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can call other actors. The `Context` type is handed to
/// every hook and is supplied when the actor is started (`run(context)`), not when it
/// is constructed. A store that needs another store's client receives it this way.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier for this record. Generated from a per-actor `u32` sequence, and
    /// ordered so listings come back in creation order.
    type Id: Eq + Ord + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload required to create a new record.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing record.
    type Update: Send + Sync + Debug;

    /// Record-specific operations (e.g. advancing an order's status).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Criteria accepted by `list`. Use `()` when the store is always listed whole.
    type Filter: Send + Sync + Debug;

    /// Dependencies injected into the hooks. Use `()` if none are needed.
    type Context: Send + Sync;

    /// Error type for this record.
    ///
    /// One enum per store rather than one per message: clients match on a single
    /// `OrderError`, at the price of every action sharing the same variants.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the record from its id and payload. Runs before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the record is stored.
    /// A failure here means the record is never stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    // --- Listing ---

    /// Whether this record belongs in a `list` response for `filter`.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    // --- Uniqueness ---

    /// Whether `other` occupies the same slot as this stored record.
    ///
    /// A newly created record that shares a slot with a stored one is handed to
    /// [`ActorEntity::absorb`] instead of being stored, and the creator gets the stored
    /// id back. The check runs inside the actor loop, so two concurrent creates for one
    /// slot still end up as a single record.
    fn same_slot(&self, _other: &Self) -> bool {
        false
    }

    /// Folds `incoming` into this stored record. `incoming` has already passed `on_create`.
    async fn absorb(&mut self, _incoming: Self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
