//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use savefood_service::dto::{CreateListingRequest, RegisterPartnerRequest, RegisterUserRequest};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A consumer registration with a unique email
pub fn unique_user_request() -> RegisterUserRequest {
    let suffix = unique_suffix();
    RegisterUserRequest {
        name: format!("Test User {suffix}"),
        email: format!("user{suffix}@example.com"),
        phone: format!("0812{suffix:08}"),
    }
}

/// A partner registration with a unique email
pub fn unique_partner_request() -> RegisterPartnerRequest {
    let suffix = unique_suffix();
    RegisterPartnerRequest {
        name: format!("Test Partner {suffix}"),
        email: format!("partner{suffix}@example.com"),
        phone: format!("0813{suffix:08}"),
    }
}

/// A listing request with the given stock, price, and deadline
pub fn listing_request(
    stock: u32,
    discounted_price: u64,
    deadline: DateTime<Utc>,
) -> CreateListingRequest {
    let suffix = unique_suffix();
    CreateListingRequest {
        name: format!("Test Food {suffix}"),
        description: Some("Surplus portion from today's batch.".to_string()),
        image_url: None,
        stock,
        original_price: 50_000,
        discounted_price,
        pickup_deadline: deadline,
        surprise_meal: discounted_price == 0,
        category: "Bakery".to_string(),
        pickup_address: "Jl. Roti Enak No. 1".to_string(),
        pickup_lat: -6.21,
        pickup_lng: 106.81,
        quality_notes: None,
    }
}
