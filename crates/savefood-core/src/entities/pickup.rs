//! Completed-pickup history record

use chrono::{DateTime, Utc};

use crate::value_objects::{PartnerId, ReservationId};

/// Append-only report row written when a reservation is verified and
/// completed. Used by partner analytics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedPickup {
    pub reservation_id: ReservationId,
    pub food_name: String,
    pub user_name: String,
    pub partner_id: PartnerId,
    pub completed_at: DateTime<Utc>,
}
