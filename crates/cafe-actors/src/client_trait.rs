//! # ActorClient Trait
//!
//! Shared surface for store-specific clients: default `get`, `list` and `delete` built on
//! the wrapped `ResourceClient`, with framework errors mapped into the store's own type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for store-specific clients to inherit the standard reads and deletes.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Clone)]
/// pub struct EnrollmentClient {
///     inner: ResourceClient<Enrollment>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Enrollment> for EnrollmentClient {
///     type Error = EnrollmentError;
///
///     fn inner(&self) -> &ResourceClient<Enrollment> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         EnrollmentError::ActorCommunicationError(e.to_string())
///     }
/// }
///
/// // get(), list() and delete() are now available on EnrollmentClient.
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The store-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the store-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every record matching `filter`, oldest first.
    #[tracing::instrument(skip(self))]
    async fn list(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(filter).await.map_err(Self::map_error)
    }

    /// Delete a record by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
