//! In-memory implementation of WishlistRepository

use dashmap::DashMap;
use tracing::instrument;

use savefood_core::traits::{RepoResult, WishlistRepository};
use savefood_core::value_objects::{ListingId, UserId};

/// Per-consumer wishlist, insertion order preserved
#[derive(Default)]
pub struct MemoryWishlistRepository {
    by_user: DashMap<UserId, Vec<ListingId>>,
}

impl MemoryWishlistRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl WishlistRepository for MemoryWishlistRepository {
    #[instrument(skip(self))]
    fn add(&self, user_id: UserId, listing_id: ListingId) -> RepoResult<()> {
        let mut wishlist = self.by_user.entry(user_id).or_default();
        if !wishlist.contains(&listing_id) {
            wishlist.push(listing_id);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn remove(&self, user_id: UserId, listing_id: ListingId) -> RepoResult<()> {
        if let Some(mut wishlist) = self.by_user.get_mut(&user_id) {
            wishlist.retain(|id| *id != listing_id);
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn contains(&self, user_id: UserId, listing_id: ListingId) -> RepoResult<bool> {
        Ok(self
            .by_user
            .get(&user_id)
            .is_some_and(|wishlist| wishlist.contains(&listing_id)))
    }

    #[instrument(skip(self))]
    fn listing_ids(&self, user_id: UserId) -> RepoResult<Vec<ListingId>> {
        Ok(self
            .by_user
            .get(&user_id)
            .map(|wishlist| wishlist.value().clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let repo = MemoryWishlistRepository::new();
        let user = UserId::generate();
        let listing = ListingId::generate();

        repo.add(user, listing).unwrap();
        repo.add(user, listing).unwrap();
        assert_eq!(repo.listing_ids(user).unwrap(), vec![listing]);
    }

    #[test]
    fn test_remove() {
        let repo = MemoryWishlistRepository::new();
        let user = UserId::generate();
        let keep = ListingId::generate();
        let drop = ListingId::generate();

        repo.add(user, keep).unwrap();
        repo.add(user, drop).unwrap();
        repo.remove(user, drop).unwrap();

        assert!(repo.contains(user, keep).unwrap());
        assert!(!repo.contains(user, drop).unwrap());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let repo = MemoryWishlistRepository::new();
        let user = UserId::generate();
        let ids: Vec<ListingId> = (0..4).map(|_| ListingId::generate()).collect();
        for id in &ids {
            repo.add(user, *id).unwrap();
        }
        assert_eq!(repo.listing_ids(user).unwrap(), ids);
    }
}
