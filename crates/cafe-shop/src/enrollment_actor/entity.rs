//! [`ActorEntity`] implementation for [`Enrollment`].

use super::error::EnrollmentError;
use crate::clock::Clock;
use crate::model::{Enrollment, EnrollmentCreate, EnrollmentFilter, EnrollmentId, EnrollmentStatus};
use async_trait::async_trait;
use cafe_actors::ActorEntity;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum EnrollmentAction {
    /// Returns the status the enrollment left.
    SetStatus(EnrollmentStatus),
}

/// Full name, phone and a plausible email are required.
pub fn validate(params: &EnrollmentCreate) -> Result<(), EnrollmentError> {
    if params.full_name.trim().is_empty() {
        return Err(EnrollmentError::MissingField("full_name"));
    }
    if params.phone.trim().is_empty() {
        return Err(EnrollmentError::MissingField("phone"));
    }
    let email = params.email.trim();
    if email.is_empty() {
        return Err(EnrollmentError::MissingField("email"));
    }
    if !email.contains('@') {
        return Err(EnrollmentError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Enrollment {
    type Id = EnrollmentId;
    type Create = EnrollmentCreate;
    type Update = ();
    type Action = EnrollmentAction;
    type ActionResult = EnrollmentStatus;
    type Filter = EnrollmentFilter;
    type Context = Clock;
    type Error = EnrollmentError;

    fn from_create_params(
        id: EnrollmentId,
        params: EnrollmentCreate,
    ) -> Result<Self, EnrollmentError> {
        validate(&params)?;
        Ok(Self::new(id, params, DateTime::<Utc>::default()))
    }

    async fn on_create(&mut self, clock: &Clock) -> Result<(), EnrollmentError> {
        self.created_at = clock.now();
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _clock: &Clock) -> Result<(), EnrollmentError> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: EnrollmentAction,
        _clock: &Clock,
    ) -> Result<EnrollmentStatus, EnrollmentError> {
        match action {
            EnrollmentAction::SetStatus(next) if self.status.can_advance_to(next) => {
                Ok(std::mem::replace(&mut self.status, next))
            }
            EnrollmentAction::SetStatus(next) => Err(EnrollmentError::InvalidTransition {
                from: self.status,
                to: next,
            }),
        }
    }

    fn matches(&self, filter: &EnrollmentFilter) -> bool {
        filter.status.map_or(true, |status| status == self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ExperienceLevel;

    fn form(full_name: &str, email: &str, phone: &str) -> EnrollmentCreate {
        EnrollmentCreate {
            full_name: full_name.into(),
            email: email.into(),
            phone: phone.into(),
            experience_level: ExperienceLevel::Beginner,
            message: None,
        }
    }

    #[test]
    fn complete_forms_pass() {
        assert_eq!(validate(&form("Nadia Islam", "nadia@example.com", "017")), Ok(()));
    }

    #[test]
    fn blank_fields_are_named() {
        assert_eq!(
            validate(&form(" ", "nadia@example.com", "017")),
            Err(EnrollmentError::MissingField("full_name"))
        );
        assert_eq!(
            validate(&form("Nadia", "nadia@example.com", "")),
            Err(EnrollmentError::MissingField("phone"))
        );
        assert_eq!(
            validate(&form("Nadia", "", "017")),
            Err(EnrollmentError::MissingField("email"))
        );
    }

    #[test]
    fn email_needs_an_at_sign() {
        assert_eq!(
            validate(&form("Nadia", "nadia.example.com", "017")),
            Err(EnrollmentError::InvalidEmail("nadia.example.com".into()))
        );
    }
}
