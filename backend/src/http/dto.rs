//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The domain types in `crate::api` already derive Serialize/Deserialize and
//! are re-exported here; this module adds the request/response wrappers.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    Booking, BookingDraft, BookingId, BookingStatus, DashboardStats, Resource, ResourceDraft,
    ResourceId,
};

/// Query parameters for the resource list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ResourceListQuery {
    /// Case-insensitive substring matched against name, location, description
    #[serde(default)]
    pub search: Option<String>,
}

/// Query parameters for the booking list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BookingListQuery {
    /// Lifecycle state filter: "active" or "canceled" (default: all)
    #[serde(default)]
    pub status: Option<String>,
}

/// Resource list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceListResponse {
    /// Matching resources
    pub resources: Vec<Resource>,
    /// Total count
    pub total: usize,
}

/// Booking list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingListResponse {
    /// Matching bookings, newest start time first
    pub bookings: Vec<Booking>,
    /// Total count
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage backend status
    pub database: String,
}
