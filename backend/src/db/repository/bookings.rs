//! Booking repository trait: persistence plus the conflict scan.
//!
//! Mutating operations re-validate the overlap invariant inside the storage
//! layer's own write scope, so two concurrent writes for the same resource
//! cannot both commit an overlapping slot. The service layer's pre-checks
//! only exist to produce precise error kinds; the check here is the
//! authoritative one.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{Booking, BookingDraft, BookingFilter, BookingId, ResourceId};
use crate::models::TimeSlot;

/// Repository trait for booking lifecycle operations.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insert a new booking in `Active` state and assign it an identifier.
    ///
    /// # Arguments
    /// * `draft` - Booking fields to store
    ///
    /// # Returns
    /// * `Ok(Booking)` - The stored booking with its assigned id
    /// * `Err(RepositoryError)` - `NotFound` if the resource id is unknown,
    ///   `Validation` if the slot is not well-formed, `Conflict` if the slot
    ///   overlaps an existing active booking for the resource
    async fn insert_booking(&self, draft: &BookingDraft) -> RepositoryResult<Booking>;

    /// Overwrite an existing booking's resource reference, times, booked-by
    /// and purpose, forcing the status back to `Active`.
    ///
    /// # Arguments
    /// * `id` - The booking to update
    /// * `draft` - Replacement field values
    ///
    /// # Returns
    /// * `Ok(Booking)` - The updated booking
    /// * `Err(RepositoryError)` - `NotFound` if the id is unknown,
    ///   `InvalidState` if the booking is canceled, `Validation` /
    ///   `Conflict` as for insert (conflict scan excludes `id` itself)
    async fn update_booking(
        &self,
        id: BookingId,
        draft: &BookingDraft,
    ) -> RepositoryResult<Booking>;

    /// Move a booking from `Active` to `Canceled`.
    ///
    /// # Returns
    /// * `Ok(Booking)` - The canceled booking
    /// * `Err(RepositoryError)` - `NotFound` if the id is unknown,
    ///   `InvalidState` if the booking is already canceled
    async fn cancel_booking(&self, id: BookingId) -> RepositoryResult<Booking>;

    /// Remove a booking record entirely.
    ///
    /// Delete is idempotent by design, unlike cancel.
    ///
    /// # Returns
    /// * `Ok(true)` - The booking existed and was removed
    /// * `Ok(false)` - No such booking (not an error)
    async fn delete_booking(&self, id: BookingId) -> RepositoryResult<bool>;

    /// Fetch one booking by id.
    ///
    /// # Returns
    /// * `Ok(Booking)` - The booking
    /// * `Err(RepositoryError)` - `NotFound` if the id is unknown
    async fn get_booking(&self, id: BookingId) -> RepositoryResult<Booking>;

    /// List bookings matching `filter`, sorted by start time descending.
    ///
    /// # Returns
    /// * `Ok(Vec<Booking>)` - Matching bookings, newest start first
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_bookings(&self, filter: BookingFilter) -> RepositoryResult<Vec<Booking>>;

    /// Pure conflict query: does `slot` overlap any active booking for
    /// `resource_id`, excluding `exclude` (a booking being edited)?
    ///
    /// An unknown `resource_id` has no bookings and therefore yields
    /// `Ok(false)`, not an error; callers that need existence checking must
    /// do it themselves (the lifecycle manager does).
    ///
    /// # Returns
    /// * `Ok(bool)` - True if any overlapping active booking exists
    /// * `Err(RepositoryError)` - If the operation fails
    async fn has_conflict(
        &self,
        resource_id: ResourceId,
        slot: TimeSlot,
        exclude: Option<BookingId>,
    ) -> RepositoryResult<bool>;
}
