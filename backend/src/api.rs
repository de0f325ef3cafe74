//! Public API surface for the booking backend.
//!
//! This file consolidates the domain types shared by the service layer,
//! the repository implementations, and the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TimeSlot;

/// Resource identifier (storage-assigned primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub i64);

/// Booking identifier (storage-assigned primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookingId(pub i64);

impl ResourceId {
    pub fn new(value: i64) -> Self {
        ResourceId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl BookingId {
    pub fn new(value: i64) -> Self {
        BookingId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ResourceId> for i64 {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

impl From<BookingId> for i64 {
    fn from(id: BookingId) -> Self {
        id.0
    }
}

/// Lifecycle state of a booking.
///
/// Transitions are one-way: a booking is created `Active` and may be moved to
/// `Canceled`, after which only permanent deletion is allowed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookingStatus {
    Active,
    Canceled,
}

impl BookingStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Active)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Active => write!(f, "Active"),
            BookingStatus::Canceled => write!(f, "Canceled"),
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(BookingStatus::Active),
            "canceled" | "cancelled" => Ok(BookingStatus::Canceled),
            _ => Err(format!("Unknown booking status: {}", s)),
        }
    }
}

/// A bookable resource (room, vehicle, equipment).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub capacity: i32,
    pub is_available: bool,
}

/// Resource fields as submitted by a client.
///
/// Used for both create and edit; edit is a full overwrite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub capacity: i32,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

/// A reservation of a resource over a half-open time interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub resource_id: ResourceId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub booked_by: String,
    pub purpose: String,
    pub status: BookingStatus,
}

impl Booking {
    /// The booked interval as a half-open [start, end) slot.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.start_time, self.end_time)
    }
}

/// Booking fields as submitted by a client.
///
/// Used for both create and edit. Status is never client-controlled: the
/// lifecycle manager forces it to `Active` on every successful write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub resource_id: ResourceId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub booked_by: String,
    pub purpose: String,
}

impl BookingDraft {
    /// The requested interval as a half-open [start, end) slot.
    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.start_time, self.end_time)
    }
}

/// Filter for booking list queries.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BookingFilter {
    /// Restrict to a single lifecycle state (None = all states).
    #[serde(default)]
    pub status: Option<BookingStatus>,
    /// Restrict to bookings of one resource.
    #[serde(default)]
    pub resource_id: Option<ResourceId>,
}

impl BookingFilter {
    pub fn active() -> Self {
        BookingFilter {
            status: Some(BookingStatus::Active),
            ..Default::default()
        }
    }

    pub fn canceled() -> Self {
        BookingFilter {
            status: Some(BookingStatus::Canceled),
            ..Default::default()
        }
    }

    pub fn for_resource(resource_id: ResourceId) -> Self {
        BookingFilter {
            resource_id: Some(resource_id),
            ..Default::default()
        }
    }
}

/// Aggregate counts for the dashboard landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_resources: usize,
    pub available_resources: usize,
    pub active_bookings: usize,
    /// Active bookings whose start time falls on the current UTC day.
    pub bookings_today: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_id_new_and_value() {
        let id = ResourceId::new(42);
        assert_eq!(id.value(), 42);
        let id = BookingId::new(7);
        assert_eq!(id.value(), 7);
    }

    #[test]
    fn test_id_equality_and_ordering() {
        assert_eq!(ResourceId::new(100), ResourceId::new(100));
        assert_ne!(BookingId::new(1), BookingId::new(2));
        assert!(BookingId::new(1) < BookingId::new(2));
    }

    #[test]
    fn test_id_display() {
        assert_eq!(ResourceId::new(5).to_string(), "5");
        assert_eq!(BookingId::new(13).to_string(), "13");
    }

    #[test]
    fn test_id_into_i64() {
        let raw: i64 = ResourceId::new(9).into();
        assert_eq!(raw, 9);
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("active".parse::<BookingStatus>(), Ok(BookingStatus::Active));
        assert_eq!("Active".parse::<BookingStatus>(), Ok(BookingStatus::Active));
        assert_eq!(
            "canceled".parse::<BookingStatus>(),
            Ok(BookingStatus::Canceled)
        );
        // British spelling accepted on input
        assert_eq!(
            "cancelled".parse::<BookingStatus>(),
            Ok(BookingStatus::Canceled)
        );
        assert!("pending".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_status_display_roundtrip() {
        for status in [BookingStatus::Active, BookingStatus::Canceled] {
            let parsed: BookingStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_serde_uses_variant_names() {
        let json = serde_json::to_string(&BookingStatus::Canceled).unwrap();
        assert_eq!(json, "\"Canceled\"");
        let back: BookingStatus = serde_json::from_str("\"Active\"").unwrap();
        assert_eq!(back, BookingStatus::Active);
    }

    #[test]
    fn test_booking_draft_defaults() {
        let json = r#"{
            "resource_id": 1,
            "start_time": "2026-03-01T09:00:00Z",
            "end_time": "2026-03-01T10:00:00Z",
            "purpose": "Standup"
        }"#;
        let draft: BookingDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.resource_id, ResourceId::new(1));
        assert_eq!(draft.booked_by, "");
        assert_eq!(draft.purpose, "Standup");
    }

    #[test]
    fn test_resource_draft_defaults() {
        let json = r#"{"name": "Board Room", "capacity": 18}"#;
        let draft: ResourceDraft = serde_json::from_str(json).unwrap();
        assert!(draft.is_available);
        assert_eq!(draft.description, "");
        assert_eq!(draft.location, "");
    }

    #[test]
    fn test_booking_slot_bounds() {
        let start = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 3, 1, 11, 0, 0).unwrap();
        let booking = Booking {
            id: BookingId::new(1),
            resource_id: ResourceId::new(1),
            start_time: start,
            end_time: end,
            booked_by: "Sarah Johnson".to_string(),
            purpose: "Quarterly Planning".to_string(),
            status: BookingStatus::Active,
        };
        assert_eq!(booking.slot().start, start);
        assert_eq!(booking.slot().end, end);
    }

    #[test]
    fn test_filter_constructors() {
        assert_eq!(BookingFilter::active().status, Some(BookingStatus::Active));
        assert_eq!(
            BookingFilter::canceled().status,
            Some(BookingStatus::Canceled)
        );
        let f = BookingFilter::for_resource(ResourceId::new(3));
        assert_eq!(f.resource_id, Some(ResourceId::new(3)));
        assert_eq!(f.status, None);
    }
}
