//! # Enrollment Actor
//!
//! Stores barista-training applications from the enrollment form. The admin reviews
//! them newest first and approves, completes or cancels them.

pub mod entity;
pub mod error;

pub use entity::EnrollmentAction;
pub use error::*;

use crate::clients::EnrollmentClient;
use crate::model::Enrollment;
use cafe_actors::ResourceActor;

/// Creates a new Enrollment actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Enrollment>, EnrollmentClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, EnrollmentClient::new(generic_client))
}
