//! Repository trait definitions and error types.
//!
//! The traits here are the abstract storage interface consumed by the
//! service layer. Implementations live in `db::repositories`; they are
//! injected explicitly (no ambient/global storage context).

pub mod bookings;
pub mod error;
pub mod resources;

pub use bookings::BookingRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use resources::ResourceRepository;

use async_trait::async_trait;

/// Combined repository interface covering every storage concern the
/// application has.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait FullRepository: ResourceRepository + BookingRepository {
    /// Check that the storage backend is reachable.
    ///
    /// # Returns
    /// * `Ok(true)` - Backend is reachable and healthy
    /// * `Err(RepositoryError)` - If the check fails
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}
