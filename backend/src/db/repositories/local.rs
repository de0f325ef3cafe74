//! In-memory repository implementation.
//!
//! All state lives behind a single `parking_lot::RwLock`, so every mutating
//! operation runs its invariant checks and its write inside one guard. That
//! closes the classic check-then-act race on bookings: two concurrent create
//! requests for overlapping slots serialize on the lock and the second one
//! fails the guarded overlap check with a conflict error.
//!
//! The lock is never held across an `.await`, so the async trait methods
//! cannot deadlock the runtime.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::super::repository::error::{ErrorContext, RepositoryError, RepositoryResult};
use super::super::repository::{BookingRepository, FullRepository, ResourceRepository};
use crate::api::{
    Booking, BookingDraft, BookingFilter, BookingId, BookingStatus, Resource, ResourceDraft,
    ResourceId,
};
use crate::models::TimeSlot;

#[derive(Debug, Default)]
struct Inner {
    resources: HashMap<ResourceId, Resource>,
    bookings: HashMap<BookingId, Booking>,
    next_resource_id: i64,
    next_booking_id: i64,
}

impl Inner {
    fn alloc_resource_id(&mut self) -> ResourceId {
        self.next_resource_id += 1;
        ResourceId::new(self.next_resource_id)
    }

    fn alloc_booking_id(&mut self) -> BookingId {
        self.next_booking_id += 1;
        BookingId::new(self.next_booking_id)
    }

    /// Overlap scan over active bookings of one resource.
    fn conflict_exists(
        &self,
        resource_id: ResourceId,
        slot: TimeSlot,
        exclude: Option<BookingId>,
    ) -> bool {
        self.bookings.values().any(|b| {
            b.resource_id == resource_id
                && b.status == BookingStatus::Active
                && Some(b.id) != exclude
                && b.slot().overlaps(&slot)
        })
    }

    /// Shared guard for insert/update: resource must exist, the slot must be
    /// well-formed, and the slot must not overlap an active booking.
    fn check_booking_write(
        &self,
        draft: &BookingDraft,
        exclude: Option<BookingId>,
        operation: &str,
    ) -> RepositoryResult<()> {
        if !self.resources.contains_key(&draft.resource_id) {
            return Err(RepositoryError::not_found_with_context(
                format!("Resource {} does not exist", draft.resource_id),
                ErrorContext::new(operation)
                    .with_entity("resource")
                    .with_entity_id(draft.resource_id),
            ));
        }
        if !draft.slot().is_valid() {
            return Err(RepositoryError::validation_with_context(
                "End time must be after start time",
                ErrorContext::new(operation).with_entity("booking"),
            ));
        }
        if self.conflict_exists(draft.resource_id, draft.slot(), exclude) {
            return Err(RepositoryError::conflict_with_context(
                format!(
                    "Resource {} is already booked during {}",
                    draft.resource_id,
                    draft.slot()
                ),
                ErrorContext::new(operation)
                    .with_entity("booking")
                    .with_details(format!("resource_id={}", draft.resource_id)),
            ));
        }
        Ok(())
    }
}

/// In-memory repository backed by hash maps.
#[derive(Debug, Default)]
pub struct LocalRepository {
    inner: RwLock<Inner>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ResourceRepository for LocalRepository {
    async fn insert_resource(&self, draft: &ResourceDraft) -> RepositoryResult<Resource> {
        let mut inner = self.inner.write();
        let id = inner.alloc_resource_id();
        let resource = Resource {
            id,
            name: draft.name.clone(),
            description: draft.description.clone(),
            location: draft.location.clone(),
            capacity: draft.capacity,
            is_available: draft.is_available,
        };
        inner.resources.insert(id, resource.clone());
        Ok(resource)
    }

    async fn update_resource(
        &self,
        id: ResourceId,
        draft: &ResourceDraft,
    ) -> RepositoryResult<Resource> {
        let mut inner = self.inner.write();
        let resource = inner.resources.get_mut(&id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Resource {} does not exist", id),
                ErrorContext::new("update_resource")
                    .with_entity("resource")
                    .with_entity_id(id),
            )
        })?;
        resource.name = draft.name.clone();
        resource.description = draft.description.clone();
        resource.location = draft.location.clone();
        resource.capacity = draft.capacity;
        resource.is_available = draft.is_available;
        Ok(resource.clone())
    }

    async fn delete_resource(&self, id: ResourceId) -> RepositoryResult<bool> {
        let mut inner = self.inner.write();
        let active = inner
            .bookings
            .values()
            .filter(|b| b.resource_id == id && b.status == BookingStatus::Active)
            .count();
        if active > 0 {
            return Err(RepositoryError::validation_with_context(
                format!(
                    "Resource {} still has {} active booking(s); cancel them first",
                    id, active
                ),
                ErrorContext::new("delete_resource")
                    .with_entity("resource")
                    .with_entity_id(id),
            ));
        }
        Ok(inner.resources.remove(&id).is_some())
    }

    async fn get_resource(&self, id: ResourceId) -> RepositoryResult<Resource> {
        let inner = self.inner.read();
        inner.resources.get(&id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Resource {} does not exist", id),
                ErrorContext::new("get_resource")
                    .with_entity("resource")
                    .with_entity_id(id),
            )
        })
    }

    async fn list_resources(&self, search: Option<&str>) -> RepositoryResult<Vec<Resource>> {
        let inner = self.inner.read();
        let term = search.map(str::to_lowercase).filter(|t| !t.is_empty());
        let mut resources: Vec<Resource> = inner
            .resources
            .values()
            .filter(|r| match &term {
                None => true,
                Some(t) => {
                    r.name.to_lowercase().contains(t)
                        || r.location.to_lowercase().contains(t)
                        || r.description.to_lowercase().contains(t)
                }
            })
            .cloned()
            .collect();
        resources.sort_by_key(|r| r.id);
        Ok(resources)
    }
}

#[async_trait]
impl BookingRepository for LocalRepository {
    async fn insert_booking(&self, draft: &BookingDraft) -> RepositoryResult<Booking> {
        let mut inner = self.inner.write();
        inner.check_booking_write(draft, None, "insert_booking")?;
        let id = inner.alloc_booking_id();
        let booking = Booking {
            id,
            resource_id: draft.resource_id,
            start_time: draft.start_time,
            end_time: draft.end_time,
            booked_by: draft.booked_by.clone(),
            purpose: draft.purpose.clone(),
            status: BookingStatus::Active,
        };
        inner.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    async fn update_booking(
        &self,
        id: BookingId,
        draft: &BookingDraft,
    ) -> RepositoryResult<Booking> {
        let mut inner = self.inner.write();
        let current = inner.bookings.get(&id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Booking {} does not exist", id),
                ErrorContext::new("update_booking")
                    .with_entity("booking")
                    .with_entity_id(id),
            )
        })?;
        if current.status == BookingStatus::Canceled {
            return Err(RepositoryError::invalid_state_with_context(
                "Cannot edit a canceled booking",
                ErrorContext::new("update_booking")
                    .with_entity("booking")
                    .with_entity_id(id),
            ));
        }
        inner.check_booking_write(draft, Some(id), "update_booking")?;
        let booking = inner
            .bookings
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::internal("Booking vanished under write lock"))?;
        booking.resource_id = draft.resource_id;
        booking.start_time = draft.start_time;
        booking.end_time = draft.end_time;
        booking.booked_by = draft.booked_by.clone();
        booking.purpose = draft.purpose.clone();
        booking.status = BookingStatus::Active;
        Ok(booking.clone())
    }

    async fn cancel_booking(&self, id: BookingId) -> RepositoryResult<Booking> {
        let mut inner = self.inner.write();
        let booking = inner.bookings.get_mut(&id).ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Booking {} does not exist", id),
                ErrorContext::new("cancel_booking")
                    .with_entity("booking")
                    .with_entity_id(id),
            )
        })?;
        if booking.status == BookingStatus::Canceled {
            return Err(RepositoryError::invalid_state_with_context(
                "Booking is already canceled",
                ErrorContext::new("cancel_booking")
                    .with_entity("booking")
                    .with_entity_id(id),
            ));
        }
        booking.status = BookingStatus::Canceled;
        Ok(booking.clone())
    }

    async fn delete_booking(&self, id: BookingId) -> RepositoryResult<bool> {
        let mut inner = self.inner.write();
        Ok(inner.bookings.remove(&id).is_some())
    }

    async fn get_booking(&self, id: BookingId) -> RepositoryResult<Booking> {
        let inner = self.inner.read();
        inner.bookings.get(&id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Booking {} does not exist", id),
                ErrorContext::new("get_booking")
                    .with_entity("booking")
                    .with_entity_id(id),
            )
        })
    }

    async fn list_bookings(&self, filter: BookingFilter) -> RepositoryResult<Vec<Booking>> {
        let inner = self.inner.read();
        let mut bookings: Vec<Booking> = inner
            .bookings
            .values()
            .filter(|b| filter.status.is_none_or(|s| b.status == s))
            .filter(|b| filter.resource_id.is_none_or(|r| b.resource_id == r))
            .cloned()
            .collect();
        // Newest start first; id as tie-breaker for a stable order.
        bookings.sort_by(|a, b| {
            b.start_time
                .cmp(&a.start_time)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(bookings)
    }

    async fn has_conflict(
        &self,
        resource_id: ResourceId,
        slot: TimeSlot,
        exclude: Option<BookingId>,
    ) -> RepositoryResult<bool> {
        let inner = self.inner.read();
        Ok(inner.conflict_exists(resource_id, slot, exclude))
    }
}

#[async_trait]
impl FullRepository for LocalRepository {}
