//! Wishlist service
//!
//! Per-consumer saved listings. Wishlisting is pure bookkeeping: it never
//! touches stock or reservations.

use chrono::{DateTime, Utc};
use tracing::instrument;

use savefood_core::value_objects::{ListingId, UserId};

use crate::dto::ListingResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Wishlist service
pub struct WishlistService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WishlistService<'a> {
    /// Create a new WishlistService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Save a listing to a consumer's wishlist; saving twice is a no-op
    #[instrument(skip(self))]
    pub fn add(&self, user_id: UserId, listing_id: ListingId) -> ServiceResult<()> {
        // Only existing listings can be wishlisted
        self.ctx
            .listing_repo()
            .find_by_id(listing_id)?
            .ok_or_else(|| ServiceError::not_found("Listing", listing_id.to_string()))?;
        self.ctx.wishlist_repo().add(user_id, listing_id)?;
        Ok(())
    }

    /// Remove a listing from a consumer's wishlist
    #[instrument(skip(self))]
    pub fn remove(&self, user_id: UserId, listing_id: ListingId) -> ServiceResult<()> {
        self.ctx.wishlist_repo().remove(user_id, listing_id)?;
        Ok(())
    }

    /// Whether the listing is on the consumer's wishlist
    #[instrument(skip(self))]
    pub fn is_wishlisted(&self, user_id: UserId, listing_id: ListingId) -> ServiceResult<bool> {
        Ok(self.ctx.wishlist_repo().contains(user_id, listing_id)?)
    }

    /// The consumer's wishlisted listings in the order they were saved
    #[instrument(skip(self))]
    pub fn wishlisted_listings(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> ServiceResult<Vec<ListingResponse>> {
        let ids = self.ctx.wishlist_repo().listing_ids(user_id)?;
        let mut listings = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(listing) = self.ctx.listing_repo().find_by_id(id)? {
                listings.push(ListingResponse::from_entity(listing, now));
            }
        }
        Ok(listings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use savefood_core::entities::Listing;
    use savefood_core::value_objects::PartnerId;

    fn seeded_listing(ctx: &ServiceContext, now: DateTime<Utc>) -> ListingId {
        let listing = Listing {
            id: ListingId::generate(),
            partner_id: PartnerId::generate(),
            name: "Croissant Coklat".to_string(),
            description: None,
            image_url: None,
            stock: 5,
            original_price: 20_000,
            discounted_price: 10_000,
            pickup_deadline: now + Duration::hours(2),
            surprise_meal: false,
            category: "Bakery".to_string(),
            pickup_address: "Jl. Roti Enak No. 1".to_string(),
            pickup_lat: -6.21,
            pickup_lng: 106.81,
            quality_notes: None,
            created_at: now,
        };
        ctx.listing_repo().insert(&listing).unwrap();
        listing.id
    }

    #[test]
    fn test_add_and_list_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ServiceContext::in_memory(dir.path());
        let now = Utc::now();
        let user = UserId::generate();
        let listing_id = seeded_listing(&ctx, now);

        let service = WishlistService::new(&ctx);
        service.add(user, listing_id).unwrap();
        service.add(user, listing_id).unwrap();

        assert!(service.is_wishlisted(user, listing_id).unwrap());
        let saved = service.wishlisted_listings(user, now).unwrap();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, listing_id);
    }

    #[test]
    fn test_add_unknown_listing_fails() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ServiceContext::in_memory(dir.path());

        let err = WishlistService::new(&ctx)
            .add(UserId::generate(), ListingId::generate())
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_remove() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = ServiceContext::in_memory(dir.path());
        let now = Utc::now();
        let user = UserId::generate();
        let listing_id = seeded_listing(&ctx, now);

        let service = WishlistService::new(&ctx);
        service.add(user, listing_id).unwrap();
        service.remove(user, listing_id).unwrap();
        assert!(!service.is_wishlisted(user, listing_id).unwrap());
    }
}
