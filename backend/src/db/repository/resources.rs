//! Resource repository trait for the bookable-resource registry.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Resource, ResourceDraft, ResourceId};

/// Repository trait for resource registry operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Insert a new resource and assign it an identifier.
    ///
    /// # Arguments
    /// * `draft` - Resource fields to store
    ///
    /// # Returns
    /// * `Ok(Resource)` - The stored resource with its assigned id
    /// * `Err(RepositoryError)` - If the operation fails
    async fn insert_resource(&self, draft: &ResourceDraft) -> RepositoryResult<Resource>;

    /// Overwrite an existing resource's fields.
    ///
    /// # Arguments
    /// * `id` - The resource to update
    /// * `draft` - Replacement field values
    ///
    /// # Returns
    /// * `Ok(Resource)` - The updated resource
    /// * `Err(RepositoryError)` - `NotFound` if the id is unknown
    async fn update_resource(
        &self,
        id: ResourceId,
        draft: &ResourceDraft,
    ) -> RepositoryResult<Resource>;

    /// Remove a resource record.
    ///
    /// Implementations enforce referential integrity inside their own write
    /// scope: deletion fails while active bookings still reference the
    /// resource. Canceled bookings are historical records and do not block.
    ///
    /// # Returns
    /// * `Ok(true)` - The resource existed and was removed
    /// * `Ok(false)` - No such resource (not an error)
    /// * `Err(RepositoryError)` - `Validation` if active bookings reference
    ///   the resource
    async fn delete_resource(&self, id: ResourceId) -> RepositoryResult<bool>;

    /// Fetch one resource by id.
    ///
    /// # Returns
    /// * `Ok(Resource)` - The resource
    /// * `Err(RepositoryError)` - `NotFound` if the id is unknown
    async fn get_resource(&self, id: ResourceId) -> RepositoryResult<Resource>;

    /// List resources, optionally filtered by a case-insensitive substring
    /// matched against name, location, and description.
    ///
    /// # Arguments
    /// * `search` - Optional filter term; `None` or empty lists everything
    ///
    /// # Returns
    /// * `Ok(Vec<Resource>)` - Matching resources ordered by id
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_resources(&self, search: Option<&str>) -> RepositoryResult<Vec<Resource>>;
}
