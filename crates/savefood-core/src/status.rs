//! Derived-status evaluator
//!
//! Pure classification of listings and reservations against the current
//! time. Every screen (detail views, lists, dashboards, the periodic
//! display refresh) goes through these functions so the rules live in
//! exactly one place.

use chrono::{DateTime, Duration, Utc};

use crate::entities::{Listing, Reservation, ReservationStatus};

/// Remaining-time threshold below which an available listing is "urgent"
pub const URGENT_WINDOW_HOURS: i64 = 2;

/// Display status of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    /// Stock remains and the pickup window is open
    Active,
    /// No stock left (takes precedence over expiry in display)
    SoldOut,
    /// Pickup window closed with stock remaining
    Expired,
}

impl ListingStatus {
    /// Classify a listing at `now`.
    ///
    /// Order matters: an available listing is Active; otherwise exhausted
    /// stock reads as SoldOut even when the deadline has also passed.
    #[must_use]
    pub fn of(listing: &Listing, now: DateTime<Utc>) -> Self {
        if listing.is_available(now) {
            Self::Active
        } else if listing.stock == 0 {
            Self::SoldOut
        } else {
            Self::Expired
        }
    }
}

/// Display status of a reservation
///
/// The stored ledger status, downgraded to `Expired` when the reservation
/// is still active but its listing's pickup window has closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationDisplayStatus {
    Active,
    Completed,
    Cancelled,
    Expired,
}

impl ReservationDisplayStatus {
    /// Classify a reservation against its listing at `now`
    #[must_use]
    pub fn of(reservation: &Reservation, listing: &Listing, now: DateTime<Utc>) -> Self {
        match reservation.status {
            ReservationStatus::Completed => Self::Completed,
            ReservationStatus::Cancelled => Self::Cancelled,
            ReservationStatus::Active => {
                if listing.is_expired(now) {
                    Self::Expired
                } else {
                    Self::Active
                }
            }
        }
    }
}

/// Whether an available listing's remaining time is inside the urgency window
#[must_use]
pub fn is_urgent(listing: &Listing, now: DateTime<Utc>) -> bool {
    listing.is_available(now)
        && listing.pickup_deadline - now < Duration::hours(URGENT_WINDOW_HOURS)
}

/// Filter to urgent listings, sorted by remaining time ascending (most
/// urgent first) for prioritized display.
#[must_use]
pub fn urgent_listings(listings: &[Listing], now: DateTime<Utc>) -> Vec<Listing> {
    let mut urgent: Vec<Listing> = listings
        .iter()
        .filter(|l| is_urgent(l, now))
        .cloned()
        .collect();
    urgent.sort_by_key(|l| l.pickup_deadline);
    urgent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{
        generate_reservation_code, ListingId, PartnerId, UserId,
    };

    fn listing(stock: u32, deadline_offset_mins: i64, now: DateTime<Utc>) -> Listing {
        Listing {
            id: ListingId::generate(),
            partner_id: PartnerId::generate(),
            name: "Surprise Pastry Box".to_string(),
            description: None,
            image_url: None,
            stock,
            original_price: 50_000,
            discounted_price: 0,
            pickup_deadline: now + Duration::minutes(deadline_offset_mins),
            surprise_meal: true,
            category: "Pastry".to_string(),
            pickup_address: "Jl. Kafein No. 10".to_string(),
            pickup_lat: -6.20,
            pickup_lng: 106.83,
            quality_notes: None,
            created_at: now,
        }
    }

    #[test]
    fn test_listing_status_active() {
        let now = Utc::now();
        assert_eq!(ListingStatus::of(&listing(3, 60, now), now), ListingStatus::Active);
    }

    #[test]
    fn test_listing_status_sold_out_beats_expired() {
        let now = Utc::now();
        assert_eq!(ListingStatus::of(&listing(0, 60, now), now), ListingStatus::SoldOut);
        // Both exhausted and past deadline: sold-out wins
        assert_eq!(ListingStatus::of(&listing(0, -60, now), now), ListingStatus::SoldOut);
    }

    #[test]
    fn test_listing_status_expired() {
        let now = Utc::now();
        assert_eq!(ListingStatus::of(&listing(2, -1, now), now), ListingStatus::Expired);
    }

    #[test]
    fn test_reservation_display_downgrades_to_expired() {
        let now = Utc::now();
        let l = listing(1, -5, now);
        let r = Reservation::new(
            UserId::generate(),
            l.id,
            generate_reservation_code(),
            now - Duration::hours(1),
        );
        assert_eq!(
            ReservationDisplayStatus::of(&r, &l, now),
            ReservationDisplayStatus::Expired
        );
    }

    #[test]
    fn test_reservation_display_keeps_terminal_statuses() {
        let now = Utc::now();
        let l = listing(1, -5, now);
        let mut r = Reservation::new(
            UserId::generate(),
            l.id,
            generate_reservation_code(),
            now - Duration::hours(1),
        );
        r.complete();
        // Completed stays completed even though the listing has expired
        assert_eq!(
            ReservationDisplayStatus::of(&r, &l, now),
            ReservationDisplayStatus::Completed
        );
    }

    #[test]
    fn test_urgency_window() {
        let now = Utc::now();
        assert!(is_urgent(&listing(1, 90, now), now));
        assert!(!is_urgent(&listing(1, 121, now), now));
        // Sold out is never urgent
        assert!(!is_urgent(&listing(0, 30, now), now));
        // Already expired is never urgent
        assert!(!is_urgent(&listing(1, -5, now), now));
    }

    #[test]
    fn test_urgent_listings_sorted_ascending() {
        let now = Utc::now();
        let listings = vec![
            listing(1, 90, now),
            listing(1, 10, now),
            listing(1, 300, now),
            listing(1, 45, now),
        ];
        let urgent = urgent_listings(&listings, now);
        assert_eq!(urgent.len(), 3);
        assert!(urgent[0].pickup_deadline <= urgent[1].pickup_deadline);
        assert!(urgent[1].pickup_deadline <= urgent[2].pickup_deadline);
    }
}
