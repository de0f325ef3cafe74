//! Service layer: booking lifecycle, conflict checking, resource registry.
//!
//! These functions are the operations exposed to the presentation layer.
//! They work with any repository implementation, validate input up front so
//! callers get precise error kinds, and delegate the authoritative overlap
//! check to the repository's guarded write path.

use chrono::Utc;
use log::{debug, info};

use super::repository::error::{ErrorContext, RepositoryError, RepositoryResult};
use super::repository::{BookingRepository, FullRepository, ResourceRepository};
use crate::api::{
    Booking, BookingDraft, BookingFilter, BookingId, DashboardStats, Resource, ResourceDraft,
    ResourceId,
};
use crate::models::TimeSlot;

// ==================== Resource registry ====================

/// Create a new resource.
pub async fn create_resource(
    repo: &dyn FullRepository,
    draft: &ResourceDraft,
) -> RepositoryResult<Resource> {
    validate_resource_draft(draft, "create_resource")?;
    let resource = repo.insert_resource(draft).await?;
    info!("Created resource {} ({})", resource.id, resource.name);
    Ok(resource)
}

/// Overwrite an existing resource's fields.
pub async fn edit_resource(
    repo: &dyn FullRepository,
    id: ResourceId,
    draft: &ResourceDraft,
) -> RepositoryResult<Resource> {
    validate_resource_draft(draft, "edit_resource")?;
    let resource = repo.update_resource(id, draft).await?;
    info!("Updated resource {}", resource.id);
    Ok(resource)
}

/// Delete a resource.
///
/// Deletion is blocked while active bookings still reference the resource;
/// the caller must cancel or delete those bookings first. The repository
/// enforces this inside its write scope, so a booking created concurrently
/// cannot be orphaned.
pub async fn delete_resource(repo: &dyn FullRepository, id: ResourceId) -> RepositoryResult<()> {
    let removed = repo.delete_resource(id).await?;
    if removed {
        info!("Deleted resource {}", id);
    }
    Ok(())
}

/// Fetch one resource by id.
pub async fn get_resource(repo: &dyn FullRepository, id: ResourceId) -> RepositoryResult<Resource> {
    repo.get_resource(id).await
}

/// List resources, optionally filtered by a case-insensitive substring over
/// name, location, and description.
pub async fn list_resources(
    repo: &dyn FullRepository,
    search: Option<&str>,
) -> RepositoryResult<Vec<Resource>> {
    repo.list_resources(search).await
}

fn validate_resource_draft(draft: &ResourceDraft, operation: &str) -> RepositoryResult<()> {
    if draft.name.trim().is_empty() {
        return Err(RepositoryError::validation_with_context(
            "Resource name is required",
            ErrorContext::new(operation).with_entity("resource"),
        ));
    }
    if draft.capacity < 1 {
        return Err(RepositoryError::validation_with_context(
            "Capacity must be a positive integer",
            ErrorContext::new(operation).with_entity("resource"),
        ));
    }
    Ok(())
}

// ==================== Conflict checker ====================

/// Pure conflict query against a resource's active bookings.
///
/// `exclude` is the id of a booking being edited, so it does not conflict
/// with itself. An unknown resource id yields `Ok(false)` (nothing to
/// conflict with); create/edit report unknown resources as not-found before
/// ever reaching this check.
pub async fn has_conflict(
    repo: &dyn FullRepository,
    resource_id: ResourceId,
    slot: TimeSlot,
    exclude: Option<BookingId>,
) -> RepositoryResult<bool> {
    repo.has_conflict(resource_id, slot, exclude).await
}

// ==================== Booking lifecycle ====================

/// Create a new booking in `Active` state.
pub async fn create_booking(
    repo: &dyn FullRepository,
    draft: &BookingDraft,
) -> RepositoryResult<Booking> {
    validate_booking_draft(repo, draft, "create_booking").await?;
    // The repository re-runs the overlap check inside its write guard; that
    // guarded check is what makes concurrent overlapping creates lose.
    let booking = repo.insert_booking(draft).await?;
    info!(
        "Created booking {} on resource {} for {}",
        booking.id,
        booking.resource_id,
        booking.slot()
    );
    Ok(booking)
}

/// Edit an existing booking, re-validating conflicts while excluding itself.
///
/// The stored status is forced back to `Active`; a stale status submitted by
/// the client can never resurrect or cancel a booking through this path.
pub async fn edit_booking(
    repo: &dyn FullRepository,
    id: BookingId,
    draft: &BookingDraft,
) -> RepositoryResult<Booking> {
    // Surface not-found / canceled-state errors before input validation so
    // the caller is redirected to the details view rather than the form.
    let current = repo.get_booking(id).await?;
    if !current.status.is_active() {
        return Err(RepositoryError::invalid_state_with_context(
            "Cannot edit a canceled booking",
            ErrorContext::new("edit_booking")
                .with_entity("booking")
                .with_entity_id(id),
        ));
    }
    validate_booking_draft(repo, draft, "edit_booking").await?;
    let booking = repo.update_booking(id, draft).await?;
    info!(
        "Updated booking {} on resource {} for {}",
        booking.id,
        booking.resource_id,
        booking.slot()
    );
    Ok(booking)
}

/// Cancel an active booking.
///
/// Not idempotent: canceling an already-canceled booking reports an invalid
/// state ("already canceled") instead of silently succeeding.
pub async fn cancel_booking(repo: &dyn FullRepository, id: BookingId) -> RepositoryResult<Booking> {
    let booking = repo.cancel_booking(id).await?;
    info!("Canceled booking {}", booking.id);
    Ok(booking)
}

/// Permanently delete a booking. Idempotent: deleting an unknown id is a
/// no-op, not an error.
pub async fn delete_booking(repo: &dyn FullRepository, id: BookingId) -> RepositoryResult<()> {
    let removed = repo.delete_booking(id).await?;
    if removed {
        info!("Deleted booking {}", id);
    } else {
        debug!("Delete of booking {} was a no-op", id);
    }
    Ok(())
}

/// Fetch one booking by id.
pub async fn get_booking(repo: &dyn FullRepository, id: BookingId) -> RepositoryResult<Booking> {
    repo.get_booking(id).await
}

/// List bookings matching `filter`, newest start time first.
pub async fn list_bookings(
    repo: &dyn FullRepository,
    filter: BookingFilter,
) -> RepositoryResult<Vec<Booking>> {
    repo.list_bookings(filter).await
}

async fn validate_booking_draft(
    repo: &dyn FullRepository,
    draft: &BookingDraft,
    operation: &str,
) -> RepositoryResult<()> {
    if draft.purpose.trim().is_empty() {
        return Err(RepositoryError::validation_with_context(
            "Purpose is required",
            ErrorContext::new(operation).with_entity("booking"),
        ));
    }
    if !draft.slot().is_valid() {
        return Err(RepositoryError::validation_with_context(
            "End time must be after start time",
            ErrorContext::new(operation).with_entity("booking"),
        ));
    }
    // Unknown resource ids are an error here, not a vacuous non-conflict.
    let resource = repo
        .get_resource(draft.resource_id)
        .await
        .map_err(|e| e.with_operation(operation))?;
    if !resource.is_available {
        return Err(RepositoryError::validation_with_context(
            format!("Resource {} is not available for booking", resource.id),
            ErrorContext::new(operation)
                .with_entity("resource")
                .with_entity_id(resource.id),
        ));
    }
    Ok(())
}

// ==================== Dashboard ====================

/// Aggregate counts for the landing page.
pub async fn dashboard_stats(repo: &dyn FullRepository) -> RepositoryResult<DashboardStats> {
    let resources = repo.list_resources(None).await?;
    let active = repo.list_bookings(BookingFilter::active()).await?;

    let today = Utc::now().date_naive();
    let bookings_today = active
        .iter()
        .filter(|b| b.start_time.date_naive() == today)
        .count();

    Ok(DashboardStats {
        total_resources: resources.len(),
        available_resources: resources.iter().filter(|r| r.is_available).count(),
        active_bookings: active.len(),
        bookings_today,
    })
}

/// Check that the storage backend is reachable.
pub async fn health_check(repo: &dyn FullRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}
