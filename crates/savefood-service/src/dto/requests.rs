//! Request DTOs for service entry points
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Listing Requests
// ============================================================================

/// Post a new food listing
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateListingRequest {
    #[validate(length(min = 1, max = 100, message = "Food name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    pub image_url: Option<String>,

    #[validate(range(min = 1, message = "Stock must be at least 1"))]
    pub stock: u32,

    /// Original price in minor currency units
    pub original_price: u64,

    /// Discounted price in minor currency units; 0 means free
    pub discounted_price: u64,

    pub pickup_deadline: DateTime<Utc>,

    #[serde(default)]
    pub surprise_meal: bool,

    #[validate(length(min = 1, max = 50, message = "Category is required"))]
    pub category: String,

    #[validate(length(min = 1, max = 200, message = "Pickup address is required"))]
    pub pickup_address: String,

    pub pickup_lat: f64,
    pub pickup_lng: f64,

    #[validate(length(max = 500, message = "Quality notes must be at most 500 characters"))]
    pub quality_notes: Option<String>,
}

// ============================================================================
// Identity Requests
// ============================================================================

/// Consumer registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 20, message = "Phone must be 6-20 characters"))]
    pub phone: String,
}

/// Partner registration request
///
/// Address, venue type, and coordinates are filled with placeholders the
/// partner completes from their profile page later.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterPartnerRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 6, max = 20, message = "Phone must be 6-20 characters"))]
    pub phone: String,
}

/// Update consumer profile request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserProfileRequest {
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 6, max = 20, message = "Phone must be 6-20 characters"))]
    pub phone: Option<String>,

    pub avatar_url: Option<String>,
}

/// Update partner profile request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePartnerProfileRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 200, message = "Address must be 1-200 characters"))]
    pub address: Option<String>,

    #[validate(length(min = 1, max = 50, message = "Venue type must be 1-50 characters"))]
    pub venue_type: Option<String>,

    #[validate(length(min = 6, max = 20, message = "Contact must be 6-20 characters"))]
    pub contact: Option<String>,

    pub avatar_url: Option<String>,
}
