//! Demo data seeding for local development.
//!
//! Populates a repository with a handful of sample resources and bookings so
//! the dashboard and list endpoints have something to show. Opt-in only; the
//! server runs it when `SEED_DEMO_DATA=1`.

use chrono::{TimeDelta, Utc};
use log::info;

use super::repository::error::RepositoryResult;
use super::repository::FullRepository;
use super::services;
use crate::api::{BookingDraft, ResourceDraft};

/// Seed the repository with sample resources and bookings.
///
/// Returns the number of resources and bookings created.
pub async fn seed_demo_data(repo: &dyn FullRepository) -> RepositoryResult<(usize, usize)> {
    let resources = vec![
        ResourceDraft {
            name: "Conference Room A".to_string(),
            description: "Large conference room with 4K projector and video conferencing"
                .to_string(),
            location: "3rd Floor, West Wing".to_string(),
            capacity: 25,
            is_available: true,
        },
        ResourceDraft {
            name: "Meeting Room B".to_string(),
            description: "Medium-sized meeting room with smart TV and flip chart".to_string(),
            location: "2nd Floor, East Wing".to_string(),
            capacity: 12,
            is_available: true,
        },
        ResourceDraft {
            name: "Board Room".to_string(),
            description: "Executive board room with teleconference system".to_string(),
            location: "4th Floor, Executive Suite".to_string(),
            capacity: 18,
            is_available: true,
        },
        ResourceDraft {
            name: "Company Car - Toyota Corolla".to_string(),
            description: "Hybrid sedan for client visits".to_string(),
            location: "Underground Parking, Bay 12".to_string(),
            capacity: 5,
            is_available: true,
        },
        ResourceDraft {
            name: "HD Projector".to_string(),
            description: "4K projector with 120\" screen and HDMI cables".to_string(),
            location: "IT Department, Equipment Room".to_string(),
            capacity: 1,
            is_available: true,
        },
        ResourceDraft {
            name: "Patio Meeting Area".to_string(),
            description: "Outdoor patio with seating for informal meetings".to_string(),
            location: "Ground Floor, Garden Patio".to_string(),
            capacity: 15,
            // Closed for winter
            is_available: false,
        },
    ];

    let mut stored = Vec::with_capacity(resources.len());
    for draft in &resources {
        stored.push(services::create_resource(repo, draft).await?);
    }

    let day = TimeDelta::days(1);
    let hour = TimeDelta::hours(1);
    let today = Utc::now()
        .date_naive()
        .and_time(chrono::NaiveTime::MIN)
        .and_utc();

    let bookings = vec![
        BookingDraft {
            resource_id: stored[0].id,
            start_time: today + day + hour * 9,
            end_time: today + day + hour * 11,
            booked_by: "Sarah Johnson".to_string(),
            purpose: "Quarterly Planning Meeting".to_string(),
        },
        BookingDraft {
            resource_id: stored[0].id,
            start_time: today + day * 2 + hour * 14,
            end_time: today + day * 2 + hour * 16,
            booked_by: "Michael Chen".to_string(),
            purpose: "Client Presentation".to_string(),
        },
        BookingDraft {
            resource_id: stored[1].id,
            start_time: today + hour * 13,
            end_time: today + hour * 15,
            booked_by: "David Wilson".to_string(),
            purpose: "Team Stand-up".to_string(),
        },
        BookingDraft {
            resource_id: stored[2].id,
            start_time: today + day + hour * 13,
            end_time: today + day + hour * 15,
            booked_by: "CEO Office".to_string(),
            purpose: "Executive Committee".to_string(),
        },
        BookingDraft {
            resource_id: stored[3].id,
            start_time: today + day * 2 + hour * 8,
            end_time: today + day * 2 + hour * 17,
            booked_by: "James Miller".to_string(),
            purpose: "Client Site Visits".to_string(),
        },
        BookingDraft {
            resource_id: stored[4].id,
            start_time: today + day + hour * 9,
            end_time: today + day + hour * 17,
            booked_by: "Marketing Team".to_string(),
            purpose: "Trade Show Preparation".to_string(),
        },
    ];

    for draft in &bookings {
        services::create_booking(repo, draft).await?;
    }

    // One canceled booking so the canceled view is not empty.
    let canceled = services::create_booking(
        repo,
        &BookingDraft {
            resource_id: stored[1].id,
            start_time: today + day * 3 + hour * 10,
            end_time: today + day * 3 + hour * 12,
            booked_by: "Test User".to_string(),
            purpose: "Rescheduled workshop".to_string(),
        },
    )
    .await?;
    services::cancel_booking(repo, canceled.id).await?;

    info!(
        "Seeded {} resources and {} bookings",
        stored.len(),
        bookings.len() + 1
    );
    Ok((stored.len(), bookings.len() + 1))
}
