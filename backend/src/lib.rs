//! # Resource Booking Backend
//!
//! Backend for a resource-booking application: bookable resources (rooms,
//! vehicles, equipment), reservations with interval-overlap conflict
//! detection, a booking lifecycle (Active → Canceled → deleted), and
//! dashboard statistics. The backend exposes a REST API via Axum.
//!
//! ## Features
//!
//! - **Resource registry**: CRUD over bookable resources with availability
//!   flag and substring search
//! - **Conflict detection**: half-open interval overlap checks against a
//!   resource's active bookings
//! - **Booking lifecycle**: create, edit (with re-validation), cancel, and
//!   permanent delete, with one-way state transitions
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Domain types and DTOs shared across layers
//! - [`models`]: Time interval primitives (the overlap predicate lives here)
//! - [`db`]: Repository pattern, service layer, and persistence
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
