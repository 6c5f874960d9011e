//! Ledger integration tests
//!
//! End-to-end scenarios through the service layer over in-memory stores,
//! driven by a virtual clock.
//!
//! Run with: cargo test -p integration-tests --test ledger_tests

use chrono::Duration;

use integration_tests::{fixtures::listing_request, TestLedger};
use savefood_core::value_objects::ListingId;
use savefood_service::{ListingService, ReservationService, StatusRefresher};

fn post(ledger: &TestLedger, stock: u32, discounted_price: u64, deadline_mins: i64) -> ListingId {
    let now = ledger.clock.now();
    ListingService::new(&ledger.ctx)
        .create_listing(
            ledger.partner_id,
            listing_request(
                stock,
                discounted_price,
                now + Duration::minutes(deadline_mins),
            ),
            now,
        )
        .expect("post listing")
        .id
}

// ============================================================================
// Reservation Flow
// ============================================================================

#[test]
fn test_reserve_decrements_stock_and_stores_one_active_reservation() {
    let ledger = TestLedger::new();
    let now = ledger.clock.now();
    let listing_id = post(&ledger, 3, 10_000, 60);

    let reservations = ReservationService::new(&ledger.ctx);
    let reservation = reservations
        .reserve(ledger.user_id, listing_id, now)
        .unwrap();

    assert_eq!(reservation.status, "active");
    assert_eq!(reservation.user_id, ledger.user_id);
    assert_eq!(reservation.listing_id, listing_id);
    assert_eq!(reservation.code.len(), 6);
    assert_eq!(reservation.qr_payload, format!("SAVEFOOD_{}", reservation.code));

    let listing = ledger
        .ctx
        .listing_repo()
        .find_by_id(listing_id)
        .unwrap()
        .unwrap();
    assert_eq!(listing.stock, 2);

    let mine = reservations
        .reservations_for_user(ledger.user_id, now)
        .unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].display_status, "active");
}

#[test]
fn test_reserve_sold_out_fails_and_leaves_stock_at_zero() {
    let ledger = TestLedger::new();
    let now = ledger.clock.now();
    let listing_id = post(&ledger, 1, 10_000, 60);

    let reservations = ReservationService::new(&ledger.ctx);
    reservations
        .reserve(ledger.user_id, listing_id, now)
        .unwrap();

    let err = reservations
        .reserve(ledger.user_id, listing_id, now)
        .unwrap_err();
    assert!(err.as_domain().unwrap().is_unavailable());
    assert_eq!(err.error_code(), "SOLD_OUT");
    assert_eq!(err.message_key(), "error.foodUnavailable");

    let listing = ledger
        .ctx
        .listing_repo()
        .find_by_id(listing_id)
        .unwrap()
        .unwrap();
    assert_eq!(listing.stock, 0);
}

#[test]
fn test_reserve_after_deadline_fails_citing_expiry() {
    let mut ledger = TestLedger::new();
    let listing_id = post(&ledger, 5, 10_000, 10);

    ledger.clock.advance_minutes(11);
    let err = ReservationService::new(&ledger.ctx)
        .reserve(ledger.user_id, listing_id, ledger.clock.now())
        .unwrap_err();

    assert!(err.as_domain().unwrap().is_unavailable());
    assert_eq!(err.error_code(), "PICKUP_ENDED");
    assert_eq!(err.message_key(), "error.pickupTimeEnded");

    // Stock untouched by the failed attempt
    let listing = ledger
        .ctx
        .listing_repo()
        .find_by_id(listing_id)
        .unwrap()
        .unwrap();
    assert_eq!(listing.stock, 5);
}

#[test]
fn test_stock_never_negative_across_mixed_operations() {
    let ledger = TestLedger::new();
    let now = ledger.clock.now();
    let listing_id = post(&ledger, 2, 10_000, 60);

    let listings = ListingService::new(&ledger.ctx);
    let reservations = ReservationService::new(&ledger.ctx);

    reservations
        .reserve(ledger.user_id, listing_id, now)
        .unwrap();
    listings.retract(listing_id, now).unwrap();
    let _ = reservations.reserve(ledger.user_id, listing_id, now);
    listings.retract(listing_id, now).unwrap();

    let listing = ledger
        .ctx
        .listing_repo()
        .find_by_id(listing_id)
        .unwrap()
        .unwrap();
    assert_eq!(listing.stock, 0);
}

// ============================================================================
// Verification Flow
// ============================================================================

#[test]
fn test_full_surprise_meal_scenario() {
    let ledger = TestLedger::new();
    let now = ledger.clock.now();
    // stock=2, free item, pickup window one hour out
    let listing_id = post(&ledger, 2, 0, 60);

    let reservations = ReservationService::new(&ledger.ctx);
    let first = reservations
        .reserve(ledger.user_id, listing_id, now)
        .unwrap();
    let second = reservations
        .reserve(ledger.user_id, listing_id, now)
        .unwrap();
    assert_ne!(first.code, second.code);

    let listing = ledger
        .ctx
        .listing_repo()
        .find_by_id(listing_id)
        .unwrap()
        .unwrap();
    assert_eq!(listing.stock, 0);

    // Third attempt bounces off the empty shelf
    let err = reservations
        .reserve(ledger.user_id, listing_id, now)
        .unwrap_err();
    assert_eq!(err.error_code(), "SOLD_OUT");

    // Verifying the first code completes it and pays the partner
    let completed = reservations.verify_and_complete(&first.code, now).unwrap();
    assert_eq!(completed.status, "completed");

    let partner = ledger
        .ctx
        .identity_repo()
        .find_partner(ledger.partner_id)
        .unwrap()
        .unwrap();
    assert_eq!(partner.reward_points, 10);

    let analytics = reservations
        .analytics_for_partner(ledger.partner_id, now)
        .unwrap();
    assert_eq!(analytics.portions_saved, 1);
    assert_eq!(analytics.reward_points, 10);
    assert_eq!(analytics.history.len(), 1);
}

#[test]
fn test_verify_is_single_use() {
    let ledger = TestLedger::new();
    let now = ledger.clock.now();
    let listing_id = post(&ledger, 2, 10_000, 60);

    let reservations = ReservationService::new(&ledger.ctx);
    let reservation = reservations
        .reserve(ledger.user_id, listing_id, now)
        .unwrap();

    reservations
        .verify_and_complete(&reservation.code, now)
        .unwrap();
    let err = reservations
        .verify_and_complete(&reservation.code, now)
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_CODE");
    assert_eq!(err.message_key(), "error.invalidReservationCode");
}

#[test]
fn test_verify_accepts_scanner_payload_and_any_case() {
    let ledger = TestLedger::new();
    let now = ledger.clock.now();
    let listing_id = post(&ledger, 2, 10_000, 60);

    let reservations = ReservationService::new(&ledger.ctx);
    let first = reservations
        .reserve(ledger.user_id, listing_id, now)
        .unwrap();
    let second = reservations
        .reserve(ledger.user_id, listing_id, now)
        .unwrap();

    reservations
        .verify_and_complete(&first.qr_payload, now)
        .unwrap();
    reservations
        .verify_and_complete(&second.code.to_lowercase(), now)
        .unwrap();

    // No paid pickups pay points
    let partner = ledger
        .ctx
        .identity_repo()
        .find_partner(ledger.partner_id)
        .unwrap()
        .unwrap();
    assert_eq!(partner.reward_points, 0);
}

#[test]
fn test_verify_garbage_input_fails() {
    let ledger = TestLedger::new();
    let now = ledger.clock.now();

    let err = ReservationService::new(&ledger.ctx)
        .verify_and_complete("definitely-not-a-code", now)
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_CODE");
}

// ============================================================================
// Retraction Flow
// ============================================================================

#[test]
fn test_retract_cancels_active_reservations_and_is_idempotent() {
    let ledger = TestLedger::new();
    let now = ledger.clock.now();
    let listing_id = post(&ledger, 3, 10_000, 60);

    let listings = ListingService::new(&ledger.ctx);
    let reservations = ReservationService::new(&ledger.ctx);
    let reservation = reservations
        .reserve(ledger.user_id, listing_id, now)
        .unwrap();

    assert_eq!(listings.retract(listing_id, now).unwrap(), 1);

    let listing = ledger
        .ctx
        .listing_repo()
        .find_by_id(listing_id)
        .unwrap()
        .unwrap();
    assert_eq!(listing.stock, 0);
    assert!(listing.pickup_deadline <= now);

    let mine = reservations
        .reservations_for_user(ledger.user_id, now)
        .unwrap();
    assert_eq!(mine[0].reservation.status, "cancelled");

    // Cancelled codes no longer verify
    let err = reservations
        .verify_and_complete(&reservation.code, now)
        .unwrap_err();
    assert_eq!(err.error_code(), "INVALID_CODE");

    // Second retraction changes nothing and cancels nothing further
    assert_eq!(listings.retract(listing_id, now).unwrap(), 0);
    let listing_again = ledger
        .ctx
        .listing_repo()
        .find_by_id(listing_id)
        .unwrap()
        .unwrap();
    assert_eq!(listing_again.stock, 0);
    assert_eq!(listing_again.pickup_deadline, listing.pickup_deadline);
}

#[test]
fn test_retracted_listing_rejects_new_reservations() {
    let ledger = TestLedger::new();
    let now = ledger.clock.now();
    let listing_id = post(&ledger, 3, 10_000, 60);

    ListingService::new(&ledger.ctx)
        .retract(listing_id, now)
        .unwrap();

    let err = ReservationService::new(&ledger.ctx)
        .reserve(ledger.user_id, listing_id, now)
        .unwrap_err();
    assert!(err.as_domain().unwrap().is_unavailable());
}

// ============================================================================
// Derived Status & Refresh
// ============================================================================

#[test]
fn test_active_reservation_displays_expired_after_deadline() {
    let mut ledger = TestLedger::new();
    let now = ledger.clock.now();
    let listing_id = post(&ledger, 2, 10_000, 30);

    let reservations = ReservationService::new(&ledger.ctx);
    reservations
        .reserve(ledger.user_id, listing_id, now)
        .unwrap();

    ledger.clock.advance_hours(1);
    let mine = reservations
        .reservations_for_user(ledger.user_id, ledger.clock.now())
        .unwrap();
    // Stored status is still active; only the display state degrades
    assert_eq!(mine[0].reservation.status, "active");
    assert_eq!(mine[0].display_status, "timeUp");
}

#[test]
fn test_status_snapshot_tracks_urgency_as_time_passes() {
    let mut ledger = TestLedger::new();
    post(&ledger, 2, 10_000, 600); // ten hours out

    let refresher = StatusRefresher::new(&ledger.ctx, 60);
    let calm = refresher.snapshot(ledger.clock.now()).unwrap();
    assert!(calm.urgent.is_empty());

    // Nine hours later the same listing is inside the two-hour window
    ledger.clock.advance_hours(9);
    let tense = refresher.snapshot(ledger.clock.now()).unwrap();
    assert_eq!(tense.urgent.len(), 1);
}
