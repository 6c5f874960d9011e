//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod context;
pub mod error;
pub mod identity;
pub mod listing;
pub mod refresh;
pub mod reservation;
pub mod wishlist;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use identity::IdentityService;
pub use listing::ListingService;
pub use refresh::{ListingStatusEntry, StatusRefresher, StatusSnapshot};
pub use reservation::ReservationService;
pub use wishlist::WishlistService;
