//! Reservation ledger service
//!
//! Handles reservation creation, code verification, cascade cancellation,
//! and the partner-facing queries and analytics.

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use savefood_core::entities::{CompletedPickup, Reservation, SURPRISE_REWARD_POINTS};
use savefood_core::error::DomainError;
use savefood_core::value_objects::{
    generate_reservation_code, ListingId, PartnerId, ReservationCode, UserId,
};

use crate::dto::{
    CompletedPickupResponse, PartnerAnalyticsResponse, ReservationDetailResponse,
    ReservationResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Attempts at drawing a non-colliding code before giving up. The code
/// space is 36^6 against a handful of active reservations, so a second
/// round is already rare.
const MAX_CODE_ATTEMPTS: u32 = 8;

/// Reservation ledger service
pub struct ReservationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReservationService<'a> {
    /// Create a new ReservationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Reserve one unit of a listing for a consumer.
    ///
    /// Fails when the caller is not a consumer identity, and when the
    /// listing is sold out or past its pickup deadline (the two faces of
    /// unavailability, distinguished only by message).
    #[instrument(skip(self))]
    pub fn reserve(
        &self,
        user_id: UserId,
        listing_id: ListingId,
        now: DateTime<Utc>,
    ) -> ServiceResult<ReservationResponse> {
        self.ctx
            .identity_repo()
            .find_user(user_id)?
            .ok_or(DomainError::NotAUser)?;

        let mut listing = self
            .ctx
            .listing_repo()
            .find_by_id(listing_id)?
            .ok_or(DomainError::ListingNotFound(listing_id))?;

        if !listing.is_available(now) {
            if listing.stock == 0 {
                return Err(DomainError::SoldOut.into());
            }
            return Err(DomainError::PickupEnded.into());
        }

        listing.decrement_stock()?;
        self.ctx.listing_repo().update(&listing)?;

        let code = self.draw_unique_code()?;
        let reservation = Reservation::new(user_id, listing_id, code, now);
        self.ctx.reservation_repo().insert(&reservation)?;

        info!(
            reservation_id = %reservation.id,
            listing_id = %listing_id,
            user_id = %user_id,
            code = %reservation.code,
            stock_left = listing.stock,
            "Reservation created"
        );

        Ok(ReservationResponse::from(reservation))
    }

    /// Verify a pickup code and complete the matching reservation.
    ///
    /// Accepts the raw 6-character code or the scannable prefixed payload,
    /// case-insensitively. A code that never existed and a code whose
    /// reservation is no longer active fail identically.
    #[instrument(skip(self, code_input))]
    pub fn verify_and_complete(
        &self,
        code_input: &str,
        now: DateTime<Utc>,
    ) -> ServiceResult<ReservationResponse> {
        let code = ReservationCode::parse(code_input)?;

        let mut reservation = self
            .ctx
            .reservation_repo()
            .find_active_by_code(&code)?
            .ok_or_else(|| DomainError::InvalidCode(code.as_str().to_string()))?;

        reservation.complete();
        self.ctx.reservation_repo().update(&reservation)?;

        let listing = self
            .ctx
            .listing_repo()
            .find_by_id(reservation.listing_id)?
            .ok_or_else(|| {
                ServiceError::internal("reservation references an unknown listing")
            })?;

        // Free ("surprise") pickups earn the partner reward points
        if listing.is_free() {
            self.ctx
                .identity_repo()
                .add_reward_points(listing.partner_id, SURPRISE_REWARD_POINTS)?;
        }

        let user_name = self
            .ctx
            .identity_repo()
            .find_user(reservation.user_id)?
            .map_or_else(|| "Unknown".to_string(), |u| u.name);

        self.ctx.history_repo().append(&CompletedPickup {
            reservation_id: reservation.id,
            food_name: listing.name.clone(),
            user_name,
            partner_id: listing.partner_id,
            completed_at: now,
        })?;

        info!(
            reservation_id = %reservation.id,
            listing_id = %listing.id,
            partner_id = %listing.partner_id,
            "Reservation completed"
        );

        Ok(ReservationResponse::from(reservation))
    }

    /// Cancel every active reservation referencing a listing.
    ///
    /// Invoked by listing retraction. Returns the number cancelled.
    #[instrument(skip(self))]
    pub fn cancel_for_listing(&self, listing_id: ListingId) -> ServiceResult<usize> {
        let active = self
            .ctx
            .reservation_repo()
            .find_active_by_listing(listing_id)?;
        let cancelled = active.len();

        for mut reservation in active {
            reservation.cancel();
            self.ctx.reservation_repo().update(&reservation)?;
        }

        if cancelled > 0 {
            info!(listing_id = %listing_id, cancelled, "Cancelled active reservations");
        }

        Ok(cancelled)
    }

    /// A consumer's reservations joined with their listings, newest first.
    ///
    /// Rows whose listing cannot be resolved are skipped.
    #[instrument(skip(self))]
    pub fn reservations_for_user(
        &self,
        user_id: UserId,
        now: DateTime<Utc>,
    ) -> ServiceResult<Vec<ReservationDetailResponse>> {
        let reservations = self.ctx.reservation_repo().find_by_user(user_id)?;
        let mut details = Vec::with_capacity(reservations.len());

        for reservation in reservations {
            let listing = match self.ctx.listing_repo().find_by_id(reservation.listing_id)? {
                Some(l) => l,
                None => {
                    warn!(
                        reservation_id = %reservation.id,
                        listing_id = %reservation.listing_id,
                        "Skipping reservation with unresolvable listing"
                    );
                    continue;
                }
            };
            let partner_name = self
                .ctx
                .identity_repo()
                .find_partner(listing.partner_id)?
                .map_or_else(|| "Unknown".to_string(), |p| p.name);

            details.push(ReservationDetailResponse::from_parts(
                reservation,
                &listing,
                partner_name,
                now,
            ));
        }

        Ok(details)
    }

    /// A partner's incoming active reservations across all their listings
    #[instrument(skip(self))]
    pub fn active_reservations_for_partner(
        &self,
        partner_id: PartnerId,
    ) -> ServiceResult<Vec<ReservationResponse>> {
        let listings = self.ctx.listing_repo().find_by_partner(partner_id)?;
        let mut active = Vec::new();

        for listing in listings {
            active.extend(
                self.ctx
                    .reservation_repo()
                    .find_active_by_listing(listing.id)?
                    .into_iter()
                    .map(ReservationResponse::from),
            );
        }

        Ok(active)
    }

    /// Partner dashboard aggregates: portions saved, reward points, pickup
    /// history, and listings that went unclaimed (deadline passed with
    /// stock remaining).
    #[instrument(skip(self))]
    pub fn analytics_for_partner(
        &self,
        partner_id: PartnerId,
        now: DateTime<Utc>,
    ) -> ServiceResult<PartnerAnalyticsResponse> {
        let partner = self
            .ctx
            .identity_repo()
            .find_partner(partner_id)?
            .ok_or_else(|| ServiceError::not_found("Partner", partner_id.to_string()))?;

        let history: Vec<CompletedPickupResponse> = self
            .ctx
            .history_repo()
            .find_by_partner(partner_id)?
            .into_iter()
            .map(CompletedPickupResponse::from)
            .collect();

        let unclaimed_items = self
            .ctx
            .listing_repo()
            .find_by_partner(partner_id)?
            .iter()
            .filter(|l| l.is_expired(now) && l.stock > 0)
            .count();

        Ok(PartnerAnalyticsResponse {
            portions_saved: history.len(),
            reward_points: partner.reward_points,
            unclaimed_items,
            history,
        })
    }

    /// Draw a code that no active reservation currently holds
    fn draw_unique_code(&self) -> ServiceResult<ReservationCode> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_reservation_code();
            if !self.ctx.reservation_repo().code_in_use(&code)? {
                return Ok(code);
            }
            warn!(attempt, "Reservation code collision, redrawing");
        }
        Err(ServiceError::internal(
            "could not draw a unique reservation code",
        ))
    }
}
