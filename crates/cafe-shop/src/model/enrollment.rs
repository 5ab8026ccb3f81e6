//! Barista-training enrollment requests.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EnrollmentId(pub u32);

impl From<u32> for EnrollmentId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for EnrollmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "enrollment_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Professional,
}

/// `pending → approved → completed`, or `pending → cancelled`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnrollmentStatus {
    #[default]
    Pending,
    Approved,
    Completed,
    Cancelled,
}

impl EnrollmentStatus {
    pub fn can_advance_to(self, next: EnrollmentStatus) -> bool {
        use EnrollmentStatus::*;
        matches!(
            (self, next),
            (Pending, Approved) | (Approved, Completed) | (Pending, Cancelled)
        )
    }
}

impl Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EnrollmentStatus::Pending => "pending",
            EnrollmentStatus::Approved => "approved",
            EnrollmentStatus::Completed => "completed",
            EnrollmentStatus::Cancelled => "cancelled",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: EnrollmentId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub experience_level: ExperienceLevel,
    pub message: Option<String>,
    pub status: EnrollmentStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload of the enrollment form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentCreate {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    pub message: Option<String>,
}

/// `None` lists every enrollment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrollmentFilter {
    pub status: Option<EnrollmentStatus>,
}

impl Enrollment {
    pub fn new(id: EnrollmentId, params: EnrollmentCreate, now: DateTime<Utc>) -> Self {
        Self {
            id,
            full_name: params.full_name,
            email: params.email,
            phone: params.phone,
            experience_level: params.experience_level,
            message: params.message,
            status: EnrollmentStatus::Pending,
            created_at: now,
        }
    }
}
