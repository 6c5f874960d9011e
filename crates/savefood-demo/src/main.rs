//! SaveFood ledger demo entry point
//!
//! Run with:
//! ```bash
//! cargo run -p savefood-demo
//! ```
//!
//! Seeds the demo dataset, signs the demo consumer in, reserves a portion,
//! verifies the pickup code at the counter, and prints partner analytics.
//! Configuration is loaded from environment variables.

use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use savefood_common::{try_init_tracing, AppConfig, TracingConfig};
use savefood_core::Role;
use savefood_service::{
    IdentityService, ListingService, ReservationService, ServiceContextBuilder, StatusRefresher,
};
use savefood_store::{
    seed_demo_data, MemoryIdentityRepository, MemoryListingRepository,
    MemoryPickupHistoryRepository, MemoryReservationRepository, MemoryWishlistRepository,
    SessionStore,
};

fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing(TracingConfig::default()) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run() {
        error!(error = %e, "Demo failed");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting SaveFood ledger demo...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        tick_interval_secs = config.refresh.tick_interval_secs,
        "Configuration loaded"
    );

    // Wire the service context over in-memory stores
    let listing_repo = Arc::new(MemoryListingRepository::new());
    let identity_repo = Arc::new(MemoryIdentityRepository::new());
    let ctx = ServiceContextBuilder::new()
        .listing_repo(listing_repo.clone())
        .reservation_repo(Arc::new(MemoryReservationRepository::new()))
        .identity_repo(identity_repo.clone())
        .history_repo(Arc::new(MemoryPickupHistoryRepository::new()))
        .wishlist_repo(Arc::new(MemoryWishlistRepository::new()))
        .session_store(SessionStore::new(&config.session.dir))
        .build()?;

    // Seed the starter dataset
    let now = Utc::now();
    let demo = seed_demo_data(listing_repo.as_ref(), identity_repo.as_ref(), now)?;
    info!(
        partners = demo.partners.len(),
        listings = demo.listings.len(),
        "Demo data seeded"
    );

    // Sign the demo consumer in (mock auth; the session record persists)
    let identity = IdentityService::new(&ctx);
    let login = identity.login(&demo.user.email, Role::User)?;
    info!(first_login = login.first_login, "Signed in as demo consumer");

    // Browse what can be rescued right now
    let listings = ListingService::new(&ctx);
    for listing in listings.available_listings(now)? {
        info!(
            name = %listing.name,
            stock = listing.stock,
            price = listing.discounted_price,
            status = listing.status,
            "Available listing"
        );
    }

    // Reserve one portion of the surprise box and redeem it at the counter
    let reservations = ReservationService::new(&ctx);
    let surprise = &demo.listings[1];
    let reservation = reservations.reserve(demo.user.id, surprise.id, now)?;
    info!(
        code = %reservation.code,
        qr = %reservation.qr_payload,
        "Reservation created"
    );

    let completed = reservations.verify_and_complete(&reservation.qr_payload, Utc::now())?;
    info!(status = completed.status, "Pickup verified");

    // Partner-side view after the pickup
    let analytics = reservations.analytics_for_partner(surprise.partner_id, Utc::now())?;
    info!(
        portions_saved = analytics.portions_saved,
        reward_points = analytics.reward_points,
        unclaimed = analytics.unclaimed_items,
        "Partner analytics"
    );

    // One read-only display refresh, the way the UI ticks
    let refresher = StatusRefresher::new(&ctx, config.refresh.tick_interval_secs);
    let snapshot = refresher.snapshot(Utc::now())?;
    info!(
        listings = snapshot.statuses.len(),
        urgent = snapshot.urgent.len(),
        "Status snapshot taken"
    );

    identity.logout()?;
    info!("Demo finished");

    Ok(())
}
