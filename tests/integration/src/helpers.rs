//! Test helpers for integration tests
//!
//! Provides seeded in-memory service contexts and a virtual clock so
//! time-window behavior can be exercised deterministically.

use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;

use savefood_core::value_objects::{PartnerId, UserId};
use savefood_service::{IdentityService, ServiceContext};

use crate::fixtures::{unique_partner_request, unique_user_request};

/// A fully wired in-memory ledger with one consumer and one partner
pub struct TestLedger {
    pub ctx: ServiceContext,
    pub user_id: UserId,
    pub partner_id: PartnerId,
    pub clock: VirtualClock,
    _session_dir: TempDir,
}

impl TestLedger {
    /// Build a fresh ledger with one registered consumer and partner
    pub fn new() -> Self {
        let session_dir = TempDir::new().expect("create session dir");
        let ctx = ServiceContext::in_memory(session_dir.path());

        let identity = IdentityService::new(&ctx);
        let user_id = identity
            .register_user(unique_user_request())
            .expect("register user")
            .id;
        let partner_id = identity
            .register_partner(unique_partner_request())
            .expect("register partner")
            .id;

        Self {
            ctx,
            user_id,
            partner_id,
            clock: VirtualClock::new(),
            _session_dir: session_dir,
        }
    }
}

impl Default for TestLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// A manually advanced clock for time-window scenarios
#[derive(Debug, Clone)]
pub struct VirtualClock {
    now: DateTime<Utc>,
}

impl VirtualClock {
    /// Start the clock at the real current time
    pub fn new() -> Self {
        Self { now: Utc::now() }
    }

    /// The clock's current reading
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Move the clock forward by `minutes`
    pub fn advance_minutes(&mut self, minutes: i64) {
        self.now += Duration::minutes(minutes);
    }

    /// Move the clock forward by `hours`
    pub fn advance_hours(&mut self, hours: i64) {
        self.now += Duration::hours(hours);
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::new()
    }
}
