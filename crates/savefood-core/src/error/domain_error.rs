//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{ListingId, PartnerId, ReservationId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Listing not found: {0}")]
    ListingNotFound(ListingId),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Partner not found: {0}")]
    PartnerNotFound(PartnerId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    Validation(String),

    // =========================================================================
    // Role Errors
    // =========================================================================
    #[error("Only consumers can reserve food")]
    NotAUser,

    #[error("Only partners can post food")]
    NotAPartner,

    // =========================================================================
    // Availability Errors
    // =========================================================================
    #[error("Food is no longer available")]
    SoldOut,

    #[error("The pickup window has ended")]
    PickupEnded,

    #[error("Listing is out of stock")]
    OutOfStock,

    // =========================================================================
    // Reservation Code Errors
    // =========================================================================
    #[error("Invalid reservation code: {0}")]
    InvalidCode(String),

    // =========================================================================
    // Identity Errors
    // =========================================================================
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Wrong email or password")]
    InvalidCredentials,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Get a stable error code string
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::ListingNotFound(_) => "UNKNOWN_LISTING",
            Self::ReservationNotFound(_) => "UNKNOWN_RESERVATION",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PartnerNotFound(_) => "UNKNOWN_PARTNER",

            // Validation
            Self::Validation(_) => "VALIDATION_ERROR",

            // Role
            Self::NotAUser => "NOT_A_USER",
            Self::NotAPartner => "NOT_A_PARTNER",

            // Availability
            Self::SoldOut => "SOLD_OUT",
            Self::PickupEnded => "PICKUP_ENDED",
            Self::OutOfStock => "OUT_OF_STOCK",

            // Codes
            Self::InvalidCode(_) => "INVALID_CODE",

            // Identity
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            // Infrastructure
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the localization key the presentation layer renders for this error
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::ListingNotFound(_) => "error.foodNotFound",
            Self::ReservationNotFound(_) => "error.reservationNotFound",
            Self::UserNotFound(_) => "error.userNotFound",
            Self::PartnerNotFound(_) => "error.partnerNotFound",
            Self::Validation(_) => "error.invalidInput",
            Self::NotAUser => "error.onlyUsersCanReserve",
            Self::NotAPartner => "error.onlyPartnersCanPost",
            Self::SoldOut | Self::OutOfStock => "error.foodUnavailable",
            Self::PickupEnded => "error.pickupTimeEnded",
            Self::InvalidCode(_) => "error.invalidReservationCode",
            Self::EmailAlreadyExists => "error.emailTaken",
            Self::InvalidCredentials => "error.wrongCredentials",
            Self::Internal(_) => "error.internal",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ListingNotFound(_)
                | Self::ReservationNotFound(_)
                | Self::UserNotFound(_)
                | Self::PartnerNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a role-mismatch error
    pub fn is_role_mismatch(&self) -> bool {
        matches!(self, Self::NotAUser | Self::NotAPartner)
    }

    /// Check if this is either face of "the listing cannot be reserved":
    /// sold out or past its pickup deadline.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::SoldOut | Self::PickupEnded | Self::OutOfStock)
    }
}
