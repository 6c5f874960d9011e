//! # savefood-store
//!
//! Infrastructure layer: in-memory indexed repository implementations, the
//! file-backed persisted-session store, and the demo seed dataset.

pub mod repositories;
pub mod seed;
pub mod session;

// Re-export commonly used types at crate root
pub use repositories::{
    MemoryIdentityRepository, MemoryListingRepository, MemoryPickupHistoryRepository,
    MemoryReservationRepository, MemoryWishlistRepository,
};
pub use seed::{seed_demo_data, DemoData};
pub use session::{SessionError, SessionResult, SessionStore, StoredSession, SESSION_KEY};
