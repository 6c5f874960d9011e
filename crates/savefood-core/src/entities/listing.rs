//! Listing entity - a surplus-food offer posted by a partner

use chrono::{DateTime, Duration, Utc};

use crate::error::DomainError;
use crate::value_objects::{ListingId, PartnerId};

/// Reward points a partner earns when a free ("surprise") item is picked up
pub const SURPRISE_REWARD_POINTS: u32 = 10;

/// A surplus-food offer with limited stock and a pickup deadline.
///
/// Listings are never physically deleted: retraction zeroes the stock and
/// clamps the deadline so the listing immediately stops being reservable,
/// but the row survives for history and analytics.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub partner_id: PartnerId,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub stock: u32,
    /// Original price in minor currency units
    pub original_price: u64,
    /// Discounted price in minor currency units; 0 means free
    pub discounted_price: u64,
    pub pickup_deadline: DateTime<Utc>,
    pub surprise_meal: bool,
    pub category: String,
    pub pickup_address: String,
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    pub quality_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Whether a unit can be reserved right now: stock remains and the
    /// pickup window is still open.
    #[must_use]
    pub fn is_available(&self, now: DateTime<Utc>) -> bool {
        self.stock > 0 && self.pickup_deadline > now
    }

    /// Whether the pickup window has closed
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.pickup_deadline <= now
    }

    /// Whether the item is given away for free
    #[inline]
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.discounted_price == 0
    }

    /// Time left until the pickup deadline, `None` once it has passed
    #[must_use]
    pub fn remaining_time(&self, now: DateTime<Utc>) -> Option<Duration> {
        (self.pickup_deadline > now).then(|| self.pickup_deadline - now)
    }

    /// Take one unit off the shelf.
    ///
    /// Stock is unsigned so it can never go negative; an attempt to
    /// decrement past zero is rejected instead.
    pub fn decrement_stock(&mut self) -> Result<(), DomainError> {
        if self.stock == 0 {
            return Err(DomainError::OutOfStock);
        }
        self.stock -= 1;
        Ok(())
    }

    /// Push the pickup deadline out by `hours`. No upper bound is enforced.
    pub fn extend_deadline(&mut self, hours: i64) {
        self.pickup_deadline += Duration::hours(hours);
    }

    /// Take the listing off the market: stock to zero, deadline to `now`.
    /// Idempotent: a second retraction leaves the state unchanged.
    pub fn retract(&mut self, now: DateTime<Utc>) {
        self.stock = 0;
        if self.pickup_deadline > now {
            self.pickup_deadline = now;
        }
    }
}
