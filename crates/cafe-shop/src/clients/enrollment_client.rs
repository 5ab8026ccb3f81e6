//! # Enrollment Client
use crate::enrollment_actor::{EnrollmentAction, EnrollmentError};
use crate::model::{Enrollment, EnrollmentCreate, EnrollmentFilter, EnrollmentId, EnrollmentStatus};
use async_trait::async_trait;
use cafe_actors::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the Enrollment actor.
#[derive(Clone)]
pub struct EnrollmentClient {
    inner: ResourceClient<Enrollment>,
}

impl EnrollmentClient {
    pub fn new(inner: ResourceClient<Enrollment>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(applicant = %params.full_name))]
    pub async fn submit_enrollment(
        &self,
        params: EnrollmentCreate,
    ) -> Result<EnrollmentId, EnrollmentError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(enrollment_id = %id, "Enrollment received");
        Ok(id)
    }

    /// Enrollments with the given status (or all of them), newest first.
    #[instrument(skip(self))]
    pub async fn list_enrollments(
        &self,
        status: Option<EnrollmentStatus>,
    ) -> Result<Vec<Enrollment>, EnrollmentError> {
        let mut enrollments = self.list(EnrollmentFilter { status }).await?;
        enrollments.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(enrollments)
    }

    /// Returns the status the enrollment left.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: EnrollmentId,
        status: EnrollmentStatus,
    ) -> Result<EnrollmentStatus, EnrollmentError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, EnrollmentAction::SetStatus(status))
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Enrollment> for EnrollmentClient {
    type Error = EnrollmentError;

    fn inner(&self) -> &ResourceClient<Enrollment> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<EnrollmentError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => EnrollmentError::NotFound(id),
            Err(other) => EnrollmentError::ActorCommunicationError(other.to_string()),
        }
    }
}
