//! Identity entities - consumer and partner accounts
//!
//! The identity layer is a mock provider: the ledger trusts role tags as
//! given and never re-verifies them.

use serde::{Deserialize, Serialize};

use crate::value_objects::{PartnerId, UserId};

/// Role tag distinguishing the two kinds of account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Partner,
}

/// Consumer account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub avatar_url: Option<String>,
    /// Cleared the first time the account signs in; drives the onboarding flow
    pub has_logged_in: bool,
}

impl User {
    /// Create a new consumer account that has never signed in
    #[must_use]
    pub fn new(name: String, email: String, phone: String) -> Self {
        Self {
            id: UserId::generate(),
            name,
            email,
            phone,
            avatar_url: None,
            has_logged_in: false,
        }
    }
}

/// Partner (food seller) account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub email: String,
    pub address: String,
    /// Kind of venue, e.g. "Bakery" or "Cafe"
    pub venue_type: String,
    pub contact: String,
    /// Cumulative counter incremented on free-item pickups; display ranking only
    pub reward_points: u32,
    pub lat: f64,
    pub lng: f64,
    pub avatar_url: Option<String>,
    pub has_logged_in: bool,
}

impl Partner {
    /// Create a new partner account with zero reward points
    #[must_use]
    pub fn new(
        name: String,
        email: String,
        address: String,
        venue_type: String,
        contact: String,
        lat: f64,
        lng: f64,
    ) -> Self {
        Self {
            id: PartnerId::generate(),
            name,
            email,
            address,
            venue_type,
            contact,
            reward_points: 0,
            lat,
            lng,
            avatar_url: None,
            has_logged_in: false,
        }
    }

    /// Add reward points earned from a completed free-item pickup
    pub fn add_reward_points(&mut self, points: u32) {
        self.reward_points += points;
    }
}
