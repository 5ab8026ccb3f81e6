//! # Cafe Actors
//!
//! The in-process store behind the café back-office: one Tokio task per record type,
//! each owning its records and serving typed requests over a channel.
//!
//! ## Layers
//!
//! 1. **Entity layer** ([`ActorEntity`]): the record, its payloads, actions, list filter
//!    and error type, plus lifecycle hooks where validation lives.
//! 2. **Runtime layer** ([`ResourceActor`]): the message loop and the ordered store.
//! 3. **Interface layer** ([`ResourceClient`], [`ActorClient`]): cloneable typed handles.
//!
//! A record type is written once as an `ActorEntity`; the framework supplies
//! create/get/list/update/delete/action for it.
//!
//! ## Context Injection
//!
//! Dependencies are handed to `run(context)`, not to `new()`. The attendance store, for
//! example, is started with the employee client so that `on_create` can refuse records
//! for unknown staff:
//!
//! ```rust,ignore
//! let (employee_actor, employee_client) = ResourceActor::<Employee>::new(32);
//! let (attendance_actor, attendance_client) = ResourceActor::<AttendanceRecord>::new(32);
//!
//! tokio::spawn(employee_actor.run(()));
//! tokio::spawn(attendance_actor.run(EmployeeClient::new(employee_client.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests to one actor are processed **sequentially** (no locks on the store)
//! - Different actors run in parallel
//! - Shutdown: drop every client, the loop sees a closed channel and exits
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `ResourceClient` from scripted replies. See the
//! [`mock`] module for the four testing patterns.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
