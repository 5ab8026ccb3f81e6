//! Error types for the Enrollment actor.

use crate::model::EnrollmentStatus;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EnrollmentError {
    #[error("Enrollment not found: {0}")]
    NotFound(String),

    /// A required form field is blank.
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Cannot move enrollment from {from} to {to}")]
    InvalidTransition {
        from: EnrollmentStatus,
        to: EnrollmentStatus,
    },

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for EnrollmentError {
    fn from(msg: String) -> Self {
        EnrollmentError::ActorCommunicationError(msg)
    }
}
