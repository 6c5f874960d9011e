//! Reservation entity - a consumer's claim on one unit of a listing

use chrono::{DateTime, Utc};

use crate::value_objects::{ListingId, ReservationCode, ReservationId, UserId};

/// Stored reservation status
///
/// Transitions are one-directional: `Active` moves to `Completed` via code
/// verification or to `Cancelled` when the listing is retracted. There is no
/// way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationStatus {
    Active,
    Completed,
    Cancelled,
}

/// A consumer's claim against one unit of a listing's stock
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: ReservationId,
    pub user_id: UserId,
    pub listing_id: ListingId,
    pub code: ReservationCode,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Create a new active reservation
    #[must_use]
    pub fn new(
        user_id: UserId,
        listing_id: ListingId,
        code: ReservationCode,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ReservationId::generate(),
            user_id,
            listing_id,
            code,
            status: ReservationStatus::Active,
            created_at,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    /// Mark the reservation picked up. Only valid from `Active`.
    pub fn complete(&mut self) {
        debug_assert!(self.is_active());
        self.status = ReservationStatus::Completed;
    }

    /// Cancel the reservation (listing retracted). Only valid from `Active`.
    pub fn cancel(&mut self) {
        debug_assert!(self.is_active());
        self.status = ReservationStatus::Cancelled;
    }

    /// The scannable payload shown to the consumer
    #[must_use]
    pub fn qr_payload(&self) -> String {
        self.code.qr_payload()
    }
}
