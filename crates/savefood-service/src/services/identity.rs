//! Identity service
//!
//! Mock identity provider: accounts are matched by email within a role and
//! passwords are deliberately not checked. The current identity is
//! persisted as a single session record so the app reopens signed in.

use tracing::{info, instrument};
use validator::Validate;

use savefood_core::entities::{Partner, Role, User};
use savefood_core::error::DomainError;
use savefood_core::value_objects::{PartnerId, UserId};
use savefood_store::StoredSession;

use crate::dto::{
    IdentityResponse, LoginResponse, PartnerResponse, RegisterPartnerRequest,
    RegisterUserRequest, UpdatePartnerProfileRequest, UpdateUserProfileRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Placeholder profile values for a freshly registered partner, completed
/// from the profile page later
const NEW_PARTNER_ADDRESS: &str = "Alamat Baru (mohon lengkapi)";
const NEW_PARTNER_VENUE_TYPE: &str = "Restoran";
const NEW_PARTNER_LAT: f64 = -6.200;
const NEW_PARTNER_LNG: f64 = 106.800;

/// Identity service
pub struct IdentityService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> IdentityService<'a> {
    /// Create a new IdentityService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Sign in by email within a role.
    ///
    /// Mock-only: the password is accepted untested. The first successful
    /// sign-in flips the account's first-login flag and is reported back so
    /// the UI can run onboarding.
    #[instrument(skip(self, email))]
    pub fn login(&self, email: &str, role: Role) -> ServiceResult<LoginResponse> {
        match role {
            Role::User => {
                let mut user = self
                    .ctx
                    .identity_repo()
                    .find_user_by_email(email)?
                    .ok_or(DomainError::InvalidCredentials)?;
                let first_login = !user.has_logged_in;
                if first_login {
                    user.has_logged_in = true;
                    self.ctx.identity_repo().update_user(&user)?;
                }
                self.ctx
                    .session_store()
                    .save(&StoredSession::User(user.clone()))?;

                info!(user_id = %user.id, first_login, "User signed in");

                Ok(LoginResponse {
                    identity: IdentityResponse::from(user),
                    first_login,
                })
            }
            Role::Partner => {
                let mut partner = self
                    .ctx
                    .identity_repo()
                    .find_partner_by_email(email)?
                    .ok_or(DomainError::InvalidCredentials)?;
                let first_login = !partner.has_logged_in;
                if first_login {
                    partner.has_logged_in = true;
                    self.ctx.identity_repo().update_partner(&partner)?;
                }
                self.ctx
                    .session_store()
                    .save(&StoredSession::Partner(partner.clone()))?;

                info!(partner_id = %partner.id, first_login, "Partner signed in");

                Ok(LoginResponse {
                    identity: IdentityResponse::from(partner),
                    first_login,
                })
            }
        }
    }

    /// Register a consumer account. Does not sign in.
    #[instrument(skip(self, request))]
    pub fn register_user(&self, request: RegisterUserRequest) -> ServiceResult<UserResponse> {
        request.validate()?;
        if self.ctx.identity_repo().email_exists(&request.email)? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let user = User::new(request.name, request.email, request.phone);
        self.ctx.identity_repo().insert_user(&user)?;

        info!(user_id = %user.id, "User registered");

        Ok(UserResponse::from(user))
    }

    /// Register a partner account with placeholder venue details. Does not
    /// sign in.
    #[instrument(skip(self, request))]
    pub fn register_partner(
        &self,
        request: RegisterPartnerRequest,
    ) -> ServiceResult<PartnerResponse> {
        request.validate()?;
        if self.ctx.identity_repo().email_exists(&request.email)? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let partner = Partner::new(
            request.name,
            request.email,
            NEW_PARTNER_ADDRESS.to_string(),
            NEW_PARTNER_VENUE_TYPE.to_string(),
            request.phone,
            NEW_PARTNER_LAT,
            NEW_PARTNER_LNG,
        );
        self.ctx.identity_repo().insert_partner(&partner)?;

        info!(partner_id = %partner.id, "Partner registered");

        Ok(PartnerResponse::from(partner))
    }

    /// Sign out: remove the persisted session
    #[instrument(skip(self))]
    pub fn logout(&self) -> ServiceResult<()> {
        self.ctx.session_store().clear()?;
        info!("Signed out");
        Ok(())
    }

    /// The persisted identity from the last sign-in, if any
    #[instrument(skip(self))]
    pub fn current_session(&self) -> ServiceResult<Option<StoredSession>> {
        Ok(self.ctx.session_store().load()?)
    }

    /// Update a consumer profile; keeps the persisted session in step when
    /// it belongs to the same account.
    #[instrument(skip(self, request))]
    pub fn update_user_profile(
        &self,
        user_id: UserId,
        request: UpdateUserProfileRequest,
    ) -> ServiceResult<UserResponse> {
        request.validate()?;
        let mut user = self
            .ctx
            .identity_repo()
            .find_user(user_id)?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if let Some(name) = request.name {
            user.name = name;
        }
        if let Some(phone) = request.phone {
            user.phone = phone;
        }
        if let Some(avatar_url) = request.avatar_url {
            user.avatar_url = Some(avatar_url);
        }
        self.ctx.identity_repo().update_user(&user)?;
        self.refresh_session_if_current(&StoredSession::User(user.clone()))?;

        Ok(UserResponse::from(user))
    }

    /// Update a partner profile; keeps the persisted session in step when
    /// it belongs to the same account.
    #[instrument(skip(self, request))]
    pub fn update_partner_profile(
        &self,
        partner_id: PartnerId,
        request: UpdatePartnerProfileRequest,
    ) -> ServiceResult<PartnerResponse> {
        request.validate()?;
        let mut partner = self
            .ctx
            .identity_repo()
            .find_partner(partner_id)?
            .ok_or_else(|| ServiceError::not_found("Partner", partner_id.to_string()))?;

        if let Some(name) = request.name {
            partner.name = name;
        }
        if let Some(address) = request.address {
            partner.address = address;
        }
        if let Some(venue_type) = request.venue_type {
            partner.venue_type = venue_type;
        }
        if let Some(contact) = request.contact {
            partner.contact = contact;
        }
        if let Some(avatar_url) = request.avatar_url {
            partner.avatar_url = Some(avatar_url);
        }
        self.ctx.identity_repo().update_partner(&partner)?;
        self.refresh_session_if_current(&StoredSession::Partner(partner.clone()))?;

        Ok(PartnerResponse::from(partner))
    }

    /// Delete a consumer account and sign out
    #[instrument(skip(self))]
    pub fn delete_user_profile(&self, user_id: UserId) -> ServiceResult<()> {
        self.ctx.identity_repo().delete_user(user_id)?;
        self.logout()
    }

    /// Delete a partner account and sign out
    #[instrument(skip(self))]
    pub fn delete_partner_profile(&self, partner_id: PartnerId) -> ServiceResult<()> {
        self.ctx.identity_repo().delete_partner(partner_id)?;
        self.logout()
    }

    /// Partners ranked by reward points, best first, truncated to `limit`
    #[instrument(skip(self))]
    pub fn popular_partners(&self, limit: usize) -> ServiceResult<Vec<PartnerResponse>> {
        let mut partners = self.ctx.identity_repo().all_partners()?;
        partners.sort_by(|a, b| b.reward_points.cmp(&a.reward_points));
        partners.truncate(limit);
        Ok(partners.into_iter().map(PartnerResponse::from).collect())
    }

    /// Rewrite the persisted session when it refers to the given identity
    fn refresh_session_if_current(&self, updated: &StoredSession) -> ServiceResult<()> {
        let matches = match (self.ctx.session_store().load()?, updated) {
            (Some(StoredSession::User(current)), StoredSession::User(user)) => {
                current.id == user.id
            }
            (Some(StoredSession::Partner(current)), StoredSession::Partner(partner)) => {
                current.id == partner.id
            }
            _ => false,
        };
        if matches {
            self.ctx.session_store().save(updated)?;
        }
        Ok(())
    }
}
