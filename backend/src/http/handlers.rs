//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the service
//! layer for business logic; no invariant is enforced here.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    BookingListQuery, BookingListResponse, HealthResponse, ResourceListQuery, ResourceListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    Booking, BookingDraft, BookingFilter, BookingId, BookingStatus, DashboardStats, Resource,
    ResourceDraft, ResourceId,
};
use crate::db::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check & Dashboard
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and storage is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

/// GET /v1/stats
///
/// Aggregate dashboard counters.
pub async fn get_stats(State(state): State<AppState>) -> HandlerResult<DashboardStats> {
    let stats = services::dashboard_stats(state.repository.as_ref()).await?;
    Ok(Json(stats))
}

// =============================================================================
// Resource CRUD
// =============================================================================

/// GET /v1/resources
///
/// List resources, optionally filtered with `?search=`.
pub async fn list_resources(
    State(state): State<AppState>,
    Query(query): Query<ResourceListQuery>,
) -> HandlerResult<ResourceListResponse> {
    let resources =
        services::list_resources(state.repository.as_ref(), query.search.as_deref()).await?;
    let total = resources.len();
    Ok(Json(ResourceListResponse { resources, total }))
}

/// POST /v1/resources
///
/// Create a new resource.
pub async fn create_resource(
    State(state): State<AppState>,
    Json(draft): Json<ResourceDraft>,
) -> Result<(StatusCode, Json<Resource>), AppError> {
    let resource = services::create_resource(state.repository.as_ref(), &draft).await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// GET /v1/resources/{id}
pub async fn get_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Resource> {
    let resource = services::get_resource(state.repository.as_ref(), ResourceId::new(id)).await?;
    Ok(Json(resource))
}

/// PUT /v1/resources/{id}
///
/// Overwrite a resource's fields.
pub async fn update_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<ResourceDraft>,
) -> HandlerResult<Resource> {
    let resource =
        services::edit_resource(state.repository.as_ref(), ResourceId::new(id), &draft).await?;
    Ok(Json(resource))
}

/// DELETE /v1/resources/{id}
///
/// Delete a resource. Rejected while active bookings reference it.
pub async fn delete_resource(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    services::delete_resource(state.repository.as_ref(), ResourceId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /v1/resources/{id}/bookings
///
/// All bookings (any status) of one resource, newest start first.
pub async fn list_resource_bookings(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<BookingListResponse> {
    let resource_id = ResourceId::new(id);
    // 404 for unknown resources rather than an empty list.
    services::get_resource(state.repository.as_ref(), resource_id).await?;
    let bookings = services::list_bookings(
        state.repository.as_ref(),
        BookingFilter::for_resource(resource_id),
    )
    .await?;
    let total = bookings.len();
    Ok(Json(BookingListResponse { bookings, total }))
}

// =============================================================================
// Booking lifecycle
// =============================================================================

/// GET /v1/bookings
///
/// List bookings, optionally filtered with `?status=active|canceled`.
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<BookingListQuery>,
) -> HandlerResult<BookingListResponse> {
    let status = match query.status.as_deref() {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<BookingStatus>()
                .map_err(AppError::BadRequest)?,
        ),
    };
    let bookings = services::list_bookings(
        state.repository.as_ref(),
        BookingFilter {
            status,
            resource_id: None,
        },
    )
    .await?;
    let total = bookings.len();
    Ok(Json(BookingListResponse { bookings, total }))
}

/// POST /v1/bookings
///
/// Create a new booking; rejected with 409 when the slot conflicts.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(draft): Json<BookingDraft>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let booking = services::create_booking(state.repository.as_ref(), &draft).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /v1/bookings/{id}
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Booking> {
    let booking = services::get_booking(state.repository.as_ref(), BookingId::new(id)).await?;
    Ok(Json(booking))
}

/// PUT /v1/bookings/{id}
///
/// Edit a booking; re-validates conflicts excluding the booking itself.
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<BookingDraft>,
) -> HandlerResult<Booking> {
    let booking =
        services::edit_booking(state.repository.as_ref(), BookingId::new(id), &draft).await?;
    Ok(Json(booking))
}

/// POST /v1/bookings/{id}/cancel
///
/// Cancel an active booking; 409 when it is already canceled.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> HandlerResult<Booking> {
    let booking = services::cancel_booking(state.repository.as_ref(), BookingId::new(id)).await?;
    Ok(Json(booking))
}

/// DELETE /v1/bookings/{id}
///
/// Permanently delete a booking; succeeds even when the id is unknown.
pub async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    services::delete_booking(state.repository.as_ref(), BookingId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
