//! Response DTOs for the presentation layer
//!
//! All response DTOs implement `Serialize`. Typed ids serialize as strings;
//! status fields carry the localization labels the screens already use.

use chrono::{DateTime, Utc};
use serde::Serialize;

use savefood_core::value_objects::{ListingId, PartnerId, ReservationId, UserId};

// ============================================================================
// Listing Responses
// ============================================================================

/// A listing plus its derived display state
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    pub id: ListingId,
    pub partner_id: PartnerId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub stock: u32,
    pub original_price: u64,
    pub discounted_price: u64,
    pub pickup_deadline: DateTime<Utc>,
    pub surprise_meal: bool,
    pub category: String,
    pub pickup_address: String,
    pub pickup_lat: f64,
    pub pickup_lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_notes: Option<String>,
    /// Display label: "active", "soldOut", or "timeUp"
    pub status: &'static str,
    /// Seconds until the pickup deadline, absent once it has passed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_secs: Option<i64>,
}

// ============================================================================
// Reservation Responses
// ============================================================================

/// A stored reservation as handed back to the consumer
#[derive(Debug, Clone, Serialize)]
pub struct ReservationResponse {
    pub id: ReservationId,
    pub user_id: UserId,
    pub listing_id: ListingId,
    /// Display form of the pickup code (uppercase)
    pub code: String,
    /// Scannable payload: namespace prefix + code
    pub qr_payload: String,
    /// Stored ledger status: "active", "completed", or "cancelled"
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
}

/// A reservation joined with its listing for list screens
#[derive(Debug, Clone, Serialize)]
pub struct ReservationDetailResponse {
    #[serde(flatten)]
    pub reservation: ReservationResponse,
    pub food_name: String,
    pub partner_name: String,
    /// Display status, downgraded to "timeUp" when the listing expired
    /// under a still-active reservation
    pub display_status: &'static str,
}

// ============================================================================
// Analytics Responses
// ============================================================================

/// One completed pickup, as shown in partner reports
#[derive(Debug, Clone, Serialize)]
pub struct CompletedPickupResponse {
    pub reservation_id: ReservationId,
    pub food_name: String,
    pub user_name: String,
    pub completed_at: DateTime<Utc>,
}

/// Partner dashboard aggregates
#[derive(Debug, Clone, Serialize)]
pub struct PartnerAnalyticsResponse {
    /// Count of completed pickups
    pub portions_saved: usize,
    pub reward_points: u32,
    /// Listings whose deadline passed while stock remained
    pub unclaimed_items: usize,
    pub history: Vec<CompletedPickupResponse>,
}

// ============================================================================
// Identity Responses
// ============================================================================

/// Public consumer profile
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Public partner profile
#[derive(Debug, Clone, Serialize)]
pub struct PartnerResponse {
    pub id: PartnerId,
    pub name: String,
    pub email: String,
    pub address: String,
    pub venue_type: String,
    pub contact: String,
    pub reward_points: u32,
    pub lat: f64,
    pub lng: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Either side of the identity split, tagged by role
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role")]
pub enum IdentityResponse {
    #[serde(rename = "USER")]
    User(UserResponse),
    #[serde(rename = "PARTNER")]
    Partner(PartnerResponse),
}

/// Result of a successful login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub identity: IdentityResponse,
    /// True on the account's first ever sign-in; drives onboarding
    pub first_login: bool,
}
