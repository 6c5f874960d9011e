//! In-memory repository implementations
//!
//! Every repository keeps its rows in id-keyed maps so lookups are O(1);
//! the reservation store additionally maintains a normalized-code secondary
//! index. There is no persistence - the stores exist for the lifetime of
//! the process, matching the mock data layer they replace.

mod history;
mod identity;
mod listing;
mod reservation;
mod wishlist;

pub use history::MemoryPickupHistoryRepository;
pub use identity::MemoryIdentityRepository;
pub use listing::MemoryListingRepository;
pub use reservation::MemoryReservationRepository;
pub use wishlist::MemoryWishlistRepository;
