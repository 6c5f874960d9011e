//! In-memory implementation of ListingRepository

use dashmap::DashMap;
use tracing::instrument;

use savefood_core::entities::Listing;
use savefood_core::error::DomainError;
use savefood_core::traits::{ListingRepository, RepoResult};
use savefood_core::value_objects::{ListingId, PartnerId};

/// In-memory implementation of ListingRepository
#[derive(Default)]
pub struct MemoryListingRepository {
    listings: DashMap<ListingId, Listing>,
}

impl MemoryListingRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ListingRepository for MemoryListingRepository {
    #[instrument(skip(self))]
    fn find_by_id(&self, id: ListingId) -> RepoResult<Option<Listing>> {
        Ok(self.listings.get(&id).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    fn find_all(&self) -> RepoResult<Vec<Listing>> {
        let mut all: Vec<Listing> = self
            .listings
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    #[instrument(skip(self))]
    fn find_by_partner(&self, partner_id: PartnerId) -> RepoResult<Vec<Listing>> {
        let mut owned: Vec<Listing> = self
            .listings
            .iter()
            .filter(|entry| entry.value().partner_id == partner_id)
            .map(|entry| entry.value().clone())
            .collect();
        owned.sort_by_key(|l| l.pickup_deadline);
        Ok(owned)
    }

    #[instrument(skip(self, listing), fields(listing_id = %listing.id))]
    fn insert(&self, listing: &Listing) -> RepoResult<()> {
        self.listings.insert(listing.id, listing.clone());
        Ok(())
    }

    #[instrument(skip(self, listing), fields(listing_id = %listing.id))]
    fn update(&self, listing: &Listing) -> RepoResult<()> {
        if !self.listings.contains_key(&listing.id) {
            return Err(DomainError::ListingNotFound(listing.id));
        }
        self.listings.insert(listing.id, listing.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn listing(partner_id: PartnerId, deadline_offset_mins: i64) -> Listing {
        let now = Utc::now();
        Listing {
            id: ListingId::generate(),
            partner_id,
            name: "Roti Gandum".to_string(),
            description: None,
            image_url: None,
            stock: 2,
            original_price: 25_000,
            discounted_price: 0,
            pickup_deadline: now + Duration::minutes(deadline_offset_mins),
            surprise_meal: false,
            category: "Bakery".to_string(),
            pickup_address: "Jl. Roti Enak No. 1".to_string(),
            pickup_lat: -6.21,
            pickup_lng: 106.81,
            quality_notes: None,
            created_at: now,
        }
    }

    #[test]
    fn test_insert_and_find() {
        let repo = MemoryListingRepository::new();
        let l = listing(PartnerId::generate(), 60);
        repo.insert(&l).unwrap();
        assert_eq!(repo.find_by_id(l.id).unwrap(), Some(l));
    }

    #[test]
    fn test_update_missing_listing_fails() {
        let repo = MemoryListingRepository::new();
        let l = listing(PartnerId::generate(), 60);
        let err = repo.update(&l).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_find_by_partner_sorted_by_deadline() {
        let repo = MemoryListingRepository::new();
        let partner = PartnerId::generate();
        repo.insert(&listing(partner, 120)).unwrap();
        repo.insert(&listing(partner, 30)).unwrap();
        repo.insert(&listing(partner, 60)).unwrap();
        repo.insert(&listing(PartnerId::generate(), 10)).unwrap();

        let owned = repo.find_by_partner(partner).unwrap();
        assert_eq!(owned.len(), 3);
        assert!(owned[0].pickup_deadline <= owned[1].pickup_deadline);
        assert!(owned[1].pickup_deadline <= owned[2].pickup_deadline);
    }
}
