//! Data transfer objects
//!
//! Requests carry `Deserialize` + `Validate`; responses carry `Serialize`
//! with ids rendered as strings.

mod mappers;
mod requests;
mod responses;

pub use mappers::{listing_status_label, reservation_display_label, reservation_status_label};
pub use requests::{
    CreateListingRequest, RegisterPartnerRequest, RegisterUserRequest,
    UpdatePartnerProfileRequest, UpdateUserProfileRequest,
};
pub use responses::{
    CompletedPickupResponse, IdentityResponse, ListingResponse, LoginResponse,
    PartnerAnalyticsResponse, PartnerResponse, ReservationDetailResponse, ReservationResponse,
    UserResponse,
};
