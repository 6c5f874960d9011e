//! Entity-to-DTO mapping

use chrono::{DateTime, Utc};

use savefood_core::entities::{CompletedPickup, Listing, Partner, Reservation, ReservationStatus, User};
use savefood_core::status::{ListingStatus, ReservationDisplayStatus};

use super::responses::{
    CompletedPickupResponse, IdentityResponse, ListingResponse, PartnerResponse,
    ReservationDetailResponse, ReservationResponse, UserResponse,
};

/// Display label for a listing status, matching the UI's string keys
#[must_use]
pub fn listing_status_label(status: ListingStatus) -> &'static str {
    match status {
        ListingStatus::Active => "active",
        ListingStatus::SoldOut => "soldOut",
        ListingStatus::Expired => "timeUp",
    }
}

/// Display label for a stored reservation status
#[must_use]
pub fn reservation_status_label(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Active => "active",
        ReservationStatus::Completed => "completed",
        ReservationStatus::Cancelled => "cancelled",
    }
}

/// Display label for a derived reservation display status
#[must_use]
pub fn reservation_display_label(status: ReservationDisplayStatus) -> &'static str {
    match status {
        ReservationDisplayStatus::Active => "active",
        ReservationDisplayStatus::Completed => "completed",
        ReservationDisplayStatus::Cancelled => "cancelled",
        ReservationDisplayStatus::Expired => "timeUp",
    }
}

impl ListingResponse {
    /// Build a response with the derived status evaluated at `now`
    #[must_use]
    pub fn from_entity(listing: Listing, now: DateTime<Utc>) -> Self {
        let status = listing_status_label(ListingStatus::of(&listing, now));
        let remaining_secs = listing.remaining_time(now).map(|d| d.num_seconds());
        Self {
            id: listing.id,
            partner_id: listing.partner_id,
            name: listing.name,
            description: listing.description,
            image_url: listing.image_url,
            stock: listing.stock,
            original_price: listing.original_price,
            discounted_price: listing.discounted_price,
            pickup_deadline: listing.pickup_deadline,
            surprise_meal: listing.surprise_meal,
            category: listing.category,
            pickup_address: listing.pickup_address,
            pickup_lat: listing.pickup_lat,
            pickup_lng: listing.pickup_lng,
            quality_notes: listing.quality_notes,
            status,
            remaining_secs,
        }
    }
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            user_id: reservation.user_id,
            listing_id: reservation.listing_id,
            code: reservation.code.as_str().to_string(),
            qr_payload: reservation.qr_payload(),
            status: reservation_status_label(reservation.status),
            created_at: reservation.created_at,
        }
    }
}

impl ReservationDetailResponse {
    /// Join a reservation with its listing and owning partner, evaluating
    /// the display status at `now`.
    #[must_use]
    pub fn from_parts(
        reservation: Reservation,
        listing: &Listing,
        partner_name: String,
        now: DateTime<Utc>,
    ) -> Self {
        let display_status =
            reservation_display_label(ReservationDisplayStatus::of(&reservation, listing, now));
        Self {
            food_name: listing.name.clone(),
            partner_name,
            display_status,
            reservation: ReservationResponse::from(reservation),
        }
    }
}

impl From<CompletedPickup> for CompletedPickupResponse {
    fn from(entry: CompletedPickup) -> Self {
        Self {
            reservation_id: entry.reservation_id,
            food_name: entry.food_name,
            user_name: entry.user_name,
            completed_at: entry.completed_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            avatar_url: user.avatar_url,
        }
    }
}

impl From<Partner> for PartnerResponse {
    fn from(partner: Partner) -> Self {
        Self {
            id: partner.id,
            name: partner.name,
            email: partner.email,
            address: partner.address,
            venue_type: partner.venue_type,
            contact: partner.contact,
            reward_points: partner.reward_points,
            lat: partner.lat,
            lng: partner.lng,
            avatar_url: partner.avatar_url,
        }
    }
}

impl From<User> for IdentityResponse {
    fn from(user: User) -> Self {
        Self::User(UserResponse::from(user))
    }
}

impl From<Partner> for IdentityResponse {
    fn from(partner: Partner) -> Self {
        Self::Partner(PartnerResponse::from(partner))
    }
}
