//! Plain data for the café: the menu, orders, enrollments and staff.
//!
//! The record types here are the `ActorEntity` implementors; their store logic lives in
//! the matching `*_actor` module.

pub mod enrollment;
pub mod menu;
pub mod order;
pub mod staff;

pub use enrollment::*;
pub use menu::*;
pub use order::*;
pub use staff::*;
