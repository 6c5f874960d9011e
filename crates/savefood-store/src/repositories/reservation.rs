//! In-memory implementation of ReservationRepository
//!
//! The id map and the normalized-code index live behind one lock so they
//! can never diverge: the code index always holds exactly the codes of the
//! currently-active reservations.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::instrument;

use savefood_core::entities::Reservation;
use savefood_core::error::DomainError;
use savefood_core::traits::{RepoResult, ReservationRepository};
use savefood_core::value_objects::{ListingId, ReservationCode, ReservationId, UserId};

#[derive(Default)]
struct ReservationIndex {
    by_id: HashMap<ReservationId, Reservation>,
    /// Normalized code -> active reservation id
    active_by_code: HashMap<String, ReservationId>,
}

/// In-memory implementation of ReservationRepository
#[derive(Default)]
pub struct MemoryReservationRepository {
    inner: RwLock<ReservationIndex>,
}

impl MemoryReservationRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReservationRepository for MemoryReservationRepository {
    #[instrument(skip(self))]
    fn find_by_id(&self, id: ReservationId) -> RepoResult<Option<Reservation>> {
        Ok(self.inner.read().by_id.get(&id).cloned())
    }

    #[instrument(skip(self, code), fields(code = %code))]
    fn find_active_by_code(&self, code: &ReservationCode) -> RepoResult<Option<Reservation>> {
        let inner = self.inner.read();
        Ok(inner
            .active_by_code
            .get(code.as_str())
            .and_then(|id| inner.by_id.get(id))
            .cloned())
    }

    #[instrument(skip(self))]
    fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Reservation>> {
        let mut mine: Vec<Reservation> = self
            .inner
            .read()
            .by_id
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(mine)
    }

    #[instrument(skip(self))]
    fn find_active_by_listing(&self, listing_id: ListingId) -> RepoResult<Vec<Reservation>> {
        Ok(self
            .inner
            .read()
            .by_id
            .values()
            .filter(|r| r.listing_id == listing_id && r.is_active())
            .cloned()
            .collect())
    }

    #[instrument(skip(self, code), fields(code = %code))]
    fn code_in_use(&self, code: &ReservationCode) -> RepoResult<bool> {
        Ok(self.inner.read().active_by_code.contains_key(code.as_str()))
    }

    #[instrument(skip(self, reservation), fields(reservation_id = %reservation.id))]
    fn insert(&self, reservation: &Reservation) -> RepoResult<()> {
        let mut inner = self.inner.write();
        if reservation.is_active()
            && inner.active_by_code.contains_key(reservation.code.as_str())
        {
            // The ledger regenerates on collision; landing here means the
            // caller skipped that step.
            return Err(DomainError::Internal(format!(
                "active reservation code collision: {}",
                reservation.code
            )));
        }
        if reservation.is_active() {
            inner
                .active_by_code
                .insert(reservation.code.as_str().to_string(), reservation.id);
        }
        inner.by_id.insert(reservation.id, reservation.clone());
        Ok(())
    }

    #[instrument(skip(self, reservation), fields(reservation_id = %reservation.id))]
    fn update(&self, reservation: &Reservation) -> RepoResult<()> {
        let mut inner = self.inner.write();
        if !inner.by_id.contains_key(&reservation.id) {
            return Err(DomainError::ReservationNotFound(reservation.id));
        }
        // Keep the code index limited to active reservations
        if reservation.is_active() {
            inner
                .active_by_code
                .insert(reservation.code.as_str().to_string(), reservation.id);
        } else {
            inner.active_by_code.remove(reservation.code.as_str());
        }
        inner.by_id.insert(reservation.id, reservation.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use savefood_core::value_objects::generate_reservation_code;

    fn reservation(user_id: UserId, listing_id: ListingId) -> Reservation {
        Reservation::new(user_id, listing_id, generate_reservation_code(), Utc::now())
    }

    #[test]
    fn test_insert_and_find_by_code() {
        let repo = MemoryReservationRepository::new();
        let r = reservation(UserId::generate(), ListingId::generate());
        repo.insert(&r).unwrap();

        let found = repo.find_active_by_code(&r.code).unwrap().unwrap();
        assert_eq!(found.id, r.id);
        assert!(repo.code_in_use(&r.code).unwrap());
    }

    #[test]
    fn test_completion_releases_code_index() {
        let repo = MemoryReservationRepository::new();
        let mut r = reservation(UserId::generate(), ListingId::generate());
        repo.insert(&r).unwrap();

        r.complete();
        repo.update(&r).unwrap();

        assert!(repo.find_active_by_code(&r.code).unwrap().is_none());
        assert!(!repo.code_in_use(&r.code).unwrap());
        // The row itself survives for history
        assert!(repo.find_by_id(r.id).unwrap().is_some());
    }

    #[test]
    fn test_insert_rejects_active_code_collision() {
        let repo = MemoryReservationRepository::new();
        let r1 = reservation(UserId::generate(), ListingId::generate());
        repo.insert(&r1).unwrap();

        let mut r2 = reservation(UserId::generate(), ListingId::generate());
        r2.code = r1.code.clone();
        assert!(repo.insert(&r2).is_err());
    }

    #[test]
    fn test_find_by_user_newest_first() {
        let repo = MemoryReservationRepository::new();
        let user = UserId::generate();

        let mut older = reservation(user, ListingId::generate());
        older.created_at = Utc::now() - Duration::hours(2);
        let newer = reservation(user, ListingId::generate());
        repo.insert(&older).unwrap();
        repo.insert(&newer).unwrap();
        repo.insert(&reservation(UserId::generate(), ListingId::generate()))
            .unwrap();

        let mine = repo.find_by_user(user).unwrap();
        assert_eq!(mine.len(), 2);
        assert_eq!(mine[0].id, newer.id);
        assert_eq!(mine[1].id, older.id);
    }

    #[test]
    fn test_find_active_by_listing_skips_terminal() {
        let repo = MemoryReservationRepository::new();
        let listing = ListingId::generate();

        let active = reservation(UserId::generate(), listing);
        let mut cancelled = reservation(UserId::generate(), listing);
        repo.insert(&active).unwrap();
        repo.insert(&cancelled).unwrap();
        cancelled.cancel();
        repo.update(&cancelled).unwrap();

        let found = repo.find_active_by_listing(listing).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, active.id);
    }
}
