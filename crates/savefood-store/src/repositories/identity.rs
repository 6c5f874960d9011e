//! In-memory implementation of IdentityRepository

use dashmap::DashMap;
use tracing::instrument;

use savefood_core::entities::{Partner, User};
use savefood_core::error::DomainError;
use savefood_core::traits::{IdentityRepository, RepoResult};
use savefood_core::value_objects::{PartnerId, UserId};

/// In-memory implementation of IdentityRepository
#[derive(Default)]
pub struct MemoryIdentityRepository {
    users: DashMap<UserId, User>,
    partners: DashMap<PartnerId, Partner>,
}

impl MemoryIdentityRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityRepository for MemoryIdentityRepository {
    #[instrument(skip(self))]
    fn find_user(&self, id: UserId) -> RepoResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self))]
    fn find_partner(&self, id: PartnerId) -> RepoResult<Option<Partner>> {
        Ok(self.partners.get(&id).map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self, email))]
    fn find_user_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .iter()
            .find(|entry| entry.value().email.eq_ignore_ascii_case(email))
            .map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self, email))]
    fn find_partner_by_email(&self, email: &str) -> RepoResult<Option<Partner>> {
        Ok(self
            .partners
            .iter()
            .find(|entry| entry.value().email.eq_ignore_ascii_case(email))
            .map(|entry| entry.value().clone()))
    }

    #[instrument(skip(self, email))]
    fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_user_by_email(email)?.is_some()
            || self.find_partner_by_email(email)?.is_some())
    }

    #[instrument(skip(self))]
    fn all_partners(&self) -> RepoResult<Vec<Partner>> {
        Ok(self
            .partners
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    fn insert_user(&self, user: &User) -> RepoResult<()> {
        self.users.insert(user.id, user.clone());
        Ok(())
    }

    #[instrument(skip(self, partner), fields(partner_id = %partner.id))]
    fn insert_partner(&self, partner: &Partner) -> RepoResult<()> {
        self.partners.insert(partner.id, partner.clone());
        Ok(())
    }

    #[instrument(skip(self, user), fields(user_id = %user.id))]
    fn update_user(&self, user: &User) -> RepoResult<()> {
        if !self.users.contains_key(&user.id) {
            return Err(DomainError::UserNotFound(user.id));
        }
        self.users.insert(user.id, user.clone());
        Ok(())
    }

    #[instrument(skip(self, partner), fields(partner_id = %partner.id))]
    fn update_partner(&self, partner: &Partner) -> RepoResult<()> {
        if !self.partners.contains_key(&partner.id) {
            return Err(DomainError::PartnerNotFound(partner.id));
        }
        self.partners.insert(partner.id, partner.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete_user(&self, id: UserId) -> RepoResult<()> {
        self.users
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::UserNotFound(id))
    }

    #[instrument(skip(self))]
    fn delete_partner(&self, id: PartnerId) -> RepoResult<()> {
        self.partners
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::PartnerNotFound(id))
    }

    #[instrument(skip(self))]
    fn add_reward_points(&self, partner_id: PartnerId, points: u32) -> RepoResult<()> {
        let mut partner = self
            .partners
            .get_mut(&partner_id)
            .ok_or(DomainError::PartnerNotFound(partner_id))?;
        partner.add_reward_points(points);
        Ok(())
    }
}
