//! Error types shared by the Employee and Attendance actors.

use crate::model::EmployeeId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StaffError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    /// Attendance was marked for an id the employee store does not know.
    #[error("Unknown employee: {0}")]
    UnknownEmployee(EmployeeId),

    #[error("Employee {0} is no longer active")]
    InactiveEmployee(EmployeeId),

    /// Check-out requires a present check-in on the same record.
    #[error("{0} has not checked in")]
    NotCheckedIn(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for StaffError {
    fn from(msg: String) -> Self {
        StaffError::ActorCommunicationError(msg)
    }
}
