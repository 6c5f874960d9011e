//! Service context - dependency container for services
//!
//! Holds the repositories and the session store every service needs.

use std::path::Path;
use std::sync::Arc;

use savefood_core::traits::{
    IdentityRepository, ListingRepository, PickupHistoryRepository, ReservationRepository,
    WishlistRepository,
};
use savefood_store::{
    MemoryIdentityRepository, MemoryListingRepository, MemoryPickupHistoryRepository,
    MemoryReservationRepository, MemoryWishlistRepository, SessionStore,
};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services. It
/// provides access to:
/// - The listing, reservation, identity, pickup-history, and wishlist
///   repositories
/// - The persisted-session store
#[derive(Clone)]
pub struct ServiceContext {
    listing_repo: Arc<dyn ListingRepository>,
    reservation_repo: Arc<dyn ReservationRepository>,
    identity_repo: Arc<dyn IdentityRepository>,
    history_repo: Arc<dyn PickupHistoryRepository>,
    wishlist_repo: Arc<dyn WishlistRepository>,
    session_store: SessionStore,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        listing_repo: Arc<dyn ListingRepository>,
        reservation_repo: Arc<dyn ReservationRepository>,
        identity_repo: Arc<dyn IdentityRepository>,
        history_repo: Arc<dyn PickupHistoryRepository>,
        wishlist_repo: Arc<dyn WishlistRepository>,
        session_store: SessionStore,
    ) -> Self {
        Self {
            listing_repo,
            reservation_repo,
            identity_repo,
            history_repo,
            wishlist_repo,
            session_store,
        }
    }

    /// Create a context backed entirely by fresh in-memory stores, with the
    /// session record kept under `session_dir`.
    pub fn in_memory(session_dir: impl AsRef<Path>) -> Self {
        Self::new(
            Arc::new(MemoryListingRepository::new()),
            Arc::new(MemoryReservationRepository::new()),
            Arc::new(MemoryIdentityRepository::new()),
            Arc::new(MemoryPickupHistoryRepository::new()),
            Arc::new(MemoryWishlistRepository::new()),
            SessionStore::new(session_dir),
        )
    }

    // === Repositories ===

    /// Get the listing repository
    pub fn listing_repo(&self) -> &dyn ListingRepository {
        self.listing_repo.as_ref()
    }

    /// Get the reservation repository
    pub fn reservation_repo(&self) -> &dyn ReservationRepository {
        self.reservation_repo.as_ref()
    }

    /// Get the identity repository
    pub fn identity_repo(&self) -> &dyn IdentityRepository {
        self.identity_repo.as_ref()
    }

    /// Get the pickup history repository
    pub fn history_repo(&self) -> &dyn PickupHistoryRepository {
        self.history_repo.as_ref()
    }

    /// Get the wishlist repository
    pub fn wishlist_repo(&self) -> &dyn WishlistRepository {
        self.wishlist_repo.as_ref()
    }

    // === Session ===

    /// Get the persisted-session store
    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("session_store", &self.session_store)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom stores
pub struct ServiceContextBuilder {
    listing_repo: Option<Arc<dyn ListingRepository>>,
    reservation_repo: Option<Arc<dyn ReservationRepository>>,
    identity_repo: Option<Arc<dyn IdentityRepository>>,
    history_repo: Option<Arc<dyn PickupHistoryRepository>>,
    wishlist_repo: Option<Arc<dyn WishlistRepository>>,
    session_store: Option<SessionStore>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            listing_repo: None,
            reservation_repo: None,
            identity_repo: None,
            history_repo: None,
            wishlist_repo: None,
            session_store: None,
        }
    }

    pub fn listing_repo(mut self, repo: Arc<dyn ListingRepository>) -> Self {
        self.listing_repo = Some(repo);
        self
    }

    pub fn reservation_repo(mut self, repo: Arc<dyn ReservationRepository>) -> Self {
        self.reservation_repo = Some(repo);
        self
    }

    pub fn identity_repo(mut self, repo: Arc<dyn IdentityRepository>) -> Self {
        self.identity_repo = Some(repo);
        self
    }

    pub fn history_repo(mut self, repo: Arc<dyn PickupHistoryRepository>) -> Self {
        self.history_repo = Some(repo);
        self
    }

    pub fn wishlist_repo(mut self, repo: Arc<dyn WishlistRepository>) -> Self {
        self.wishlist_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: SessionStore) -> Self {
        self.session_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.listing_repo
                .ok_or_else(|| ServiceError::validation("listing_repo is required"))?,
            self.reservation_repo
                .ok_or_else(|| ServiceError::validation("reservation_repo is required"))?,
            self.identity_repo
                .ok_or_else(|| ServiceError::validation("identity_repo is required"))?,
            self.history_repo
                .ok_or_else(|| ServiceError::validation("history_repo is required"))?,
            self.wishlist_repo
                .ok_or_else(|| ServiceError::validation("wishlist_repo is required"))?,
            self.session_store
                .ok_or_else(|| ServiceError::validation("session_store is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
