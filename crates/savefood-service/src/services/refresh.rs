//! Periodic display refresh
//!
//! The app re-renders countdowns and status pills on a fixed interval.
//! That tick is strictly read-only: it recomputes the derived-status
//! evaluator over current ledger state and never mutates anything.

use chrono::{DateTime, Duration, Utc};
use tracing::instrument;

use savefood_core::status::{urgent_listings, ListingStatus};
use savefood_core::value_objects::ListingId;

use crate::dto::ListingResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// One listing's derived status at snapshot time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingStatusEntry {
    pub listing_id: ListingId,
    pub status: ListingStatus,
}

/// A read-only recomputation of every listing's display state
#[derive(Debug, Clone)]
pub struct StatusSnapshot {
    pub taken_at: DateTime<Utc>,
    pub statuses: Vec<ListingStatusEntry>,
    /// Available listings inside the urgency window, most urgent first
    pub urgent: Vec<ListingResponse>,
}

/// Read-only periodic status refresher
pub struct StatusRefresher<'a> {
    ctx: &'a ServiceContext,
    interval: Duration,
}

impl<'a> StatusRefresher<'a> {
    /// Create a refresher ticking every `interval_secs` seconds
    pub fn new(ctx: &'a ServiceContext, interval_secs: u64) -> Self {
        Self {
            ctx,
            interval: Duration::seconds(interval_secs as i64),
        }
    }

    /// Whether enough time has passed since `last_tick` for another refresh
    #[must_use]
    pub fn tick_due(&self, last_tick: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now - last_tick >= self.interval
    }

    /// Recompute derived statuses for every listing at `now`
    #[instrument(skip(self))]
    pub fn snapshot(&self, now: DateTime<Utc>) -> ServiceResult<StatusSnapshot> {
        let listings = self.ctx.listing_repo().find_all()?;

        let statuses = listings
            .iter()
            .map(|l| ListingStatusEntry {
                listing_id: l.id,
                status: ListingStatus::of(l, now),
            })
            .collect();

        let urgent = urgent_listings(&listings, now)
            .into_iter()
            .map(|l| ListingResponse::from_entity(l, now))
            .collect();

        Ok(StatusSnapshot {
            taken_at: now,
            statuses,
            urgent,
        })
    }
}
