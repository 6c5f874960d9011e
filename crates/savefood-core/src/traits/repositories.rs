//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Everything is synchronous: the execution
//! model is a single call stack with no suspension points, so the ports
//! are plain methods rather than futures.

use crate::entities::{CompletedPickup, Listing, Partner, Reservation, User};
use crate::error::DomainError;
use crate::value_objects::{
    ListingId, PartnerId, ReservationCode, ReservationId, UserId,
};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Listing Repository
// ============================================================================

pub trait ListingRepository: Send + Sync {
    /// Find listing by ID
    fn find_by_id(&self, id: ListingId) -> RepoResult<Option<Listing>>;

    /// List every listing, newest first
    fn find_all(&self) -> RepoResult<Vec<Listing>>;

    /// List a partner's listings, sorted by pickup deadline ascending
    fn find_by_partner(&self, partner_id: PartnerId) -> RepoResult<Vec<Listing>>;

    /// Store a new listing
    fn insert(&self, listing: &Listing) -> RepoResult<()>;

    /// Replace an existing listing
    fn update(&self, listing: &Listing) -> RepoResult<()>;
}

// ============================================================================
// Reservation Repository
// ============================================================================

pub trait ReservationRepository: Send + Sync {
    /// Find reservation by ID
    fn find_by_id(&self, id: ReservationId) -> RepoResult<Option<Reservation>>;

    /// Find the active reservation carrying `code`, via the normalized-code
    /// index. Completed and cancelled reservations are never returned.
    fn find_active_by_code(&self, code: &ReservationCode) -> RepoResult<Option<Reservation>>;

    /// List a consumer's reservations, newest first by creation time
    fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Reservation>>;

    /// List the active reservations referencing a listing
    fn find_active_by_listing(&self, listing_id: ListingId) -> RepoResult<Vec<Reservation>>;

    /// Whether `code` currently belongs to an active reservation
    fn code_in_use(&self, code: &ReservationCode) -> RepoResult<bool>;

    /// Store a new reservation; rejects a code already held by an active one
    fn insert(&self, reservation: &Reservation) -> RepoResult<()>;

    /// Replace an existing reservation, keeping the code index in step with
    /// its status
    fn update(&self, reservation: &Reservation) -> RepoResult<()>;
}

// ============================================================================
// Identity Repository
// ============================================================================

pub trait IdentityRepository: Send + Sync {
    /// Find consumer by ID
    fn find_user(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find partner by ID
    fn find_partner(&self, id: PartnerId) -> RepoResult<Option<Partner>>;

    /// Find consumer by email
    fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Find partner by email
    fn find_partner_by_email(&self, email: &str) -> RepoResult<Option<Partner>>;

    /// Check whether any identity, consumer or partner, holds this email
    fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// List all partners
    fn all_partners(&self) -> RepoResult<Vec<Partner>>;

    /// Store a new consumer
    fn insert_user(&self, user: &User) -> RepoResult<()>;

    /// Store a new partner
    fn insert_partner(&self, partner: &Partner) -> RepoResult<()>;

    /// Replace an existing consumer
    fn update_user(&self, user: &User) -> RepoResult<()>;

    /// Replace an existing partner
    fn update_partner(&self, partner: &Partner) -> RepoResult<()>;

    /// Remove a consumer
    fn delete_user(&self, id: UserId) -> RepoResult<()>;

    /// Remove a partner
    fn delete_partner(&self, id: PartnerId) -> RepoResult<()>;

    /// Add reward points to a partner's counter
    fn add_reward_points(&self, partner_id: PartnerId, points: u32) -> RepoResult<()>;
}

// ============================================================================
// Pickup History Repository
// ============================================================================

pub trait PickupHistoryRepository: Send + Sync {
    /// Append a completed-pickup record
    fn append(&self, entry: &CompletedPickup) -> RepoResult<()>;

    /// List a partner's completed pickups, oldest first
    fn find_by_partner(&self, partner_id: PartnerId) -> RepoResult<Vec<CompletedPickup>>;
}

// ============================================================================
// Wishlist Repository
// ============================================================================

pub trait WishlistRepository: Send + Sync {
    /// Add a listing to a consumer's wishlist; duplicate adds are no-ops
    fn add(&self, user_id: UserId, listing_id: ListingId) -> RepoResult<()>;

    /// Remove a listing from a consumer's wishlist
    fn remove(&self, user_id: UserId, listing_id: ListingId) -> RepoResult<()>;

    /// Whether the listing is on the consumer's wishlist
    fn contains(&self, user_id: UserId, listing_id: ListingId) -> RepoResult<bool>;

    /// The consumer's wishlisted listing ids in insertion order
    fn listing_ids(&self, user_id: UserId) -> RepoResult<Vec<ListingId>>;
}
