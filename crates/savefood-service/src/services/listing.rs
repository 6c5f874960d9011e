//! Listing service
//!
//! Handles posting, stock decrement, deadline extension, and retraction of
//! food listings.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};
use validator::Validate;

use savefood_core::entities::Listing;
use savefood_core::error::DomainError;
use savefood_core::value_objects::{ListingId, PartnerId};

use crate::dto::{CreateListingRequest, ListingResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::reservation::ReservationService;

/// Listing service
pub struct ListingService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ListingService<'a> {
    /// Create a new ListingService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a new listing on behalf of a partner
    #[instrument(skip(self, request))]
    pub fn create_listing(
        &self,
        partner_id: PartnerId,
        request: CreateListingRequest,
        now: DateTime<Utc>,
    ) -> ServiceResult<ListingResponse> {
        // Only partner identities may post
        self.ctx
            .identity_repo()
            .find_partner(partner_id)?
            .ok_or(DomainError::NotAPartner)?;

        request.validate()?;
        if request.discounted_price > request.original_price {
            return Err(ServiceError::validation(
                "Discounted price cannot exceed the original price",
            ));
        }

        let listing = Listing {
            id: ListingId::generate(),
            partner_id,
            name: request.name,
            description: request.description,
            image_url: request.image_url,
            stock: request.stock,
            original_price: request.original_price,
            discounted_price: request.discounted_price,
            pickup_deadline: request.pickup_deadline,
            surprise_meal: request.surprise_meal,
            category: request.category,
            pickup_address: request.pickup_address,
            pickup_lat: request.pickup_lat,
            pickup_lng: request.pickup_lng,
            quality_notes: request.quality_notes,
            created_at: now,
        };
        self.ctx.listing_repo().insert(&listing)?;

        info!(
            listing_id = %listing.id,
            partner_id = %partner_id,
            stock = listing.stock,
            "Listing posted"
        );

        Ok(ListingResponse::from_entity(listing, now))
    }

    /// Get one listing with its derived status
    #[instrument(skip(self))]
    pub fn listing(&self, listing_id: ListingId, now: DateTime<Utc>) -> ServiceResult<ListingResponse> {
        let listing = self.require(listing_id)?;
        Ok(ListingResponse::from_entity(listing, now))
    }

    /// All listings a consumer can reserve right now, soonest deadline first
    #[instrument(skip(self))]
    pub fn available_listings(&self, now: DateTime<Utc>) -> ServiceResult<Vec<ListingResponse>> {
        let mut available: Vec<Listing> = self
            .ctx
            .listing_repo()
            .find_all()?
            .into_iter()
            .filter(|l| l.is_available(now))
            .collect();
        available.sort_by_key(|l| l.pickup_deadline);

        Ok(available
            .into_iter()
            .map(|l| ListingResponse::from_entity(l, now))
            .collect())
    }

    /// A partner's listings, soonest deadline first
    #[instrument(skip(self))]
    pub fn listings_for_partner(
        &self,
        partner_id: PartnerId,
        now: DateTime<Utc>,
    ) -> ServiceResult<Vec<ListingResponse>> {
        Ok(self
            .ctx
            .listing_repo()
            .find_by_partner(partner_id)?
            .into_iter()
            .map(|l| ListingResponse::from_entity(l, now))
            .collect())
    }

    /// Take one unit off a listing's stock
    #[instrument(skip(self))]
    pub fn decrement_stock(&self, listing_id: ListingId) -> ServiceResult<()> {
        let mut listing = self.require(listing_id)?;
        listing.decrement_stock()?;
        self.ctx.listing_repo().update(&listing)?;
        Ok(())
    }

    /// Push a listing's pickup deadline out by `hours`
    #[instrument(skip(self))]
    pub fn extend_deadline(
        &self,
        listing_id: ListingId,
        hours: i64,
        now: DateTime<Utc>,
    ) -> ServiceResult<ListingResponse> {
        let mut listing = self.require(listing_id)?;
        listing.extend_deadline(hours);
        self.ctx.listing_repo().update(&listing)?;

        info!(
            listing_id = %listing_id,
            hours,
            new_deadline = %listing.pickup_deadline,
            "Pickup deadline extended"
        );

        Ok(ListingResponse::from_entity(listing, now))
    }

    /// Take a listing off the market and cancel its active reservations.
    ///
    /// Returns the number of reservations cancelled by the cascade.
    /// Idempotent: a second call finds nothing left to change.
    #[instrument(skip(self))]
    pub fn retract(&self, listing_id: ListingId, now: DateTime<Utc>) -> ServiceResult<usize> {
        let mut listing = self.require(listing_id)?;
        listing.retract(now);
        self.ctx.listing_repo().update(&listing)?;

        let cancelled = ReservationService::new(self.ctx).cancel_for_listing(listing_id)?;

        info!(
            listing_id = %listing_id,
            cancelled,
            "Listing retracted"
        );

        Ok(cancelled)
    }

    fn require(&self, listing_id: ListingId) -> ServiceResult<Listing> {
        self.ctx
            .listing_repo()
            .find_by_id(listing_id)?
            .ok_or_else(|| ServiceError::not_found("Listing", listing_id.to_string()))
    }
}
