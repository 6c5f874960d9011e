//! Repository ports

mod repositories;

pub use repositories::{
    IdentityRepository, ListingRepository, PickupHistoryRepository, RepoResult,
    ReservationRepository, WishlistRepository,
};
