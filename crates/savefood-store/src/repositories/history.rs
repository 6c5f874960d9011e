//! In-memory implementation of PickupHistoryRepository

use parking_lot::RwLock;
use tracing::instrument;

use savefood_core::entities::CompletedPickup;
use savefood_core::traits::{PickupHistoryRepository, RepoResult};
use savefood_core::value_objects::PartnerId;

/// Append-only in-memory pickup history
#[derive(Default)]
pub struct MemoryPickupHistoryRepository {
    entries: RwLock<Vec<CompletedPickup>>,
}

impl MemoryPickupHistoryRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PickupHistoryRepository for MemoryPickupHistoryRepository {
    #[instrument(skip(self, entry), fields(reservation_id = %entry.reservation_id))]
    fn append(&self, entry: &CompletedPickup) -> RepoResult<()> {
        self.entries.write().push(entry.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    fn find_by_partner(&self, partner_id: PartnerId) -> RepoResult<Vec<CompletedPickup>> {
        Ok(self
            .entries
            .read()
            .iter()
            .filter(|e| e.partner_id == partner_id)
            .cloned()
            .collect())
    }
}
