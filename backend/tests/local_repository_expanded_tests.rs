//! Expanded tests for LocalRepository.
//!
//! These tests cover concurrent access patterns, edge cases, and the
//! guarded conflict check for the in-memory repository implementation.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use resbook::api::{BookingDraft, BookingFilter, ResourceDraft, ResourceId};
use resbook::db::repositories::LocalRepository;
use resbook::db::repository::{BookingRepository, FullRepository, ResourceRepository};

fn test_resource(name: &str) -> ResourceDraft {
    ResourceDraft {
        name: name.to_string(),
        description: "Integration test resource".to_string(),
        location: "Test Wing".to_string(),
        capacity: 8,
        is_available: true,
    }
}

fn slot_draft(resource_id: ResourceId, start_hour: u32, end_hour: u32) -> BookingDraft {
    BookingDraft {
        resource_id,
        start_time: Utc.with_ymd_and_hms(2026, 4, 1, start_hour, 0, 0).unwrap(),
        end_time: Utc.with_ymd_and_hms(2026, 4, 1, end_hour, 0, 0).unwrap(),
        booked_by: "integration".to_string(),
        purpose: "load test".to_string(),
    }
}

// =========================================================
// Concurrent Access Tests
// =========================================================

#[tokio::test]
async fn test_concurrent_bookings_on_different_resources() {
    let repo = Arc::new(LocalRepository::new());

    let mut resource_ids = Vec::new();
    for i in 0..10 {
        let resource = repo
            .insert_resource(&test_resource(&format!("Room {}", i)))
            .await
            .unwrap();
        resource_ids.push(resource.id);
    }

    // Same slot on ten different resources: all must succeed.
    let mut handles = vec![];
    for id in resource_ids {
        let repo_clone = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            repo_clone.insert_booking(&slot_draft(id, 9, 11)).await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    let bookings = repo.list_bookings(BookingFilter::active()).await.unwrap();
    assert_eq!(bookings.len(), 10);
}

#[tokio::test]
async fn test_concurrent_overlapping_creates_exactly_one_wins() {
    let repo = Arc::new(LocalRepository::new());
    let resource = repo.insert_resource(&test_resource("Contested Room")).await.unwrap();

    // Twenty concurrent requests for the same slot on one resource.
    let mut handles = vec![];
    for _ in 0..20 {
        let repo_clone = Arc::clone(&repo);
        let id = resource.id;
        handles.push(tokio::spawn(async move {
            repo_clone.insert_booking(&slot_draft(id, 9, 11)).await
        }));
    }

    let mut successes = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(e) if e.is_conflict() => conflicts += 1,
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 19);

    let bookings = repo.list_bookings(BookingFilter::active()).await.unwrap();
    assert_eq!(bookings.len(), 1);
}

#[tokio::test]
async fn test_concurrent_adjacent_slots_all_succeed() {
    let repo = Arc::new(LocalRepository::new());
    let resource = repo.insert_resource(&test_resource("Busy Room")).await.unwrap();

    // Back-to-back hourly slots 8-9, 9-10, ..., 15-16: no pair overlaps.
    let mut handles = vec![];
    for hour in 8..16 {
        let repo_clone = Arc::clone(&repo);
        let id = resource.id;
        handles.push(tokio::spawn(async move {
            repo_clone.insert_booking(&slot_draft(id, hour, hour + 1)).await
        }));
    }

    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    let bookings = repo.list_bookings(BookingFilter::active()).await.unwrap();
    assert_eq!(bookings.len(), 8);
}

#[tokio::test]
async fn test_concurrent_read_write_same_repository() {
    let repo = Arc::new(LocalRepository::new());
    let resource = repo.insert_resource(&test_resource("Shared Room")).await.unwrap();
    repo.insert_booking(&slot_draft(resource.id, 9, 10)).await.unwrap();

    let mut read_handles = vec![];
    let mut write_handles = vec![];

    for _ in 0..10 {
        let repo_clone = Arc::clone(&repo);
        read_handles.push(tokio::spawn(async move {
            repo_clone.list_bookings(BookingFilter::default()).await
        }));
    }

    for i in 0..5u32 {
        let repo_clone = Arc::clone(&repo);
        let id = resource.id;
        write_handles.push(tokio::spawn(async move {
            repo_clone
                .insert_booking(&slot_draft(id, 11 + i, 12 + i))
                .await
        }));
    }

    for handle in read_handles {
        assert!(handle.await.unwrap().is_ok());
    }
    for handle in write_handles {
        // Writers target back-to-back slots 11-12 .. 15-16: all succeed.
        assert!(handle.await.unwrap().is_ok());
    }
}

// =========================================================
// Edge Cases
// =========================================================

#[tokio::test]
async fn test_unique_ids_across_inserts() {
    let repo = LocalRepository::new();
    let resource = repo.insert_resource(&test_resource("Room")).await.unwrap();

    let mut seen = std::collections::HashSet::new();
    for hour in 8..14 {
        let booking = repo
            .insert_booking(&slot_draft(resource.id, hour, hour + 1))
            .await
            .unwrap();
        assert!(seen.insert(booking.id), "duplicate booking id {}", booking.id);
    }
}

#[tokio::test]
async fn test_deleted_booking_id_is_not_reused() {
    let repo = LocalRepository::new();
    let resource = repo.insert_resource(&test_resource("Room")).await.unwrap();

    let first = repo.insert_booking(&slot_draft(resource.id, 8, 9)).await.unwrap();
    repo.delete_booking(first.id).await.unwrap();
    let second = repo.insert_booking(&slot_draft(resource.id, 8, 9)).await.unwrap();
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_health_check_reports_healthy() {
    let repo = LocalRepository::new();
    assert!(repo.health_check().await.unwrap());
}

#[tokio::test]
async fn test_resource_update_does_not_touch_bookings() {
    let repo = LocalRepository::new();
    let resource = repo.insert_resource(&test_resource("Room")).await.unwrap();
    let booking = repo.insert_booking(&slot_draft(resource.id, 9, 10)).await.unwrap();

    let mut draft = test_resource("Renamed Room");
    draft.is_available = false;
    repo.update_resource(resource.id, &draft).await.unwrap();

    let fetched = repo.get_booking(booking.id).await.unwrap();
    assert_eq!(fetched.resource_id, resource.id);
}
