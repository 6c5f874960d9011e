//! # savefood-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service surface at crate root
pub use services::{
    IdentityService, ListingService, ReservationService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, StatusRefresher, WishlistService,
};
