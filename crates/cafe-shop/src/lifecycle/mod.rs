//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the café's stores.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them when started
//! (`run(context)`). The order and enrollment stores get a [`Clock`](crate::clock::Clock);
//! the attendance store gets the employee client:
//!
//! ```rust,ignore
//! impl ActorEntity for Order {
//!     type Context = Clock;
//! }
//!
//! impl ActorEntity for AttendanceRecord {
//!     type Context = EmployeeClient;
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - [`CafeSystem::shutdown`] joins every task
//!
//! A client held in another actor's context is a clone; it keeps its store alive until
//! the holder stops. The graph here is acyclic (attendance → employees), so closing the
//! outer clients is enough.

pub mod cafe_system;

pub use cafe_system::*;
