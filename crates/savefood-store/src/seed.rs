//! Demo seed dataset
//!
//! The same starter dataset the mock app ships with: three partners, one
//! consumer, and three listings with staggered deadlines relative to the
//! moment of seeding.

use chrono::{DateTime, Duration, Utc};

use savefood_core::entities::{Listing, Partner, User};
use savefood_core::traits::{IdentityRepository, ListingRepository, RepoResult};
use savefood_core::value_objects::ListingId;

/// Handles to the seeded rows, for demos and tests
#[derive(Debug, Clone)]
pub struct DemoData {
    pub user: User,
    pub partners: Vec<Partner>,
    pub listings: Vec<Listing>,
}

/// Seed the demo dataset into the given repositories.
///
/// Deadlines are offsets from `now` (+2 h, +4 h, +30 min) so the dataset
/// always starts with every listing reservable and one already urgent.
pub fn seed_demo_data(
    listings: &dyn ListingRepository,
    identities: &dyn IdentityRepository,
    now: DateTime<Utc>,
) -> RepoResult<DemoData> {
    let mut bakery = Partner::new(
        "Bakery Sehat".to_string(),
        "resto1@test.com".to_string(),
        "Jl. Roti Enak No. 1".to_string(),
        "Bakery".to_string(),
        "08123".to_string(),
        -6.21,
        106.81,
    );
    bakery.reward_points = 150;
    bakery.has_logged_in = true;

    let mut warung = Partner::new(
        "Warung Nasi Ibu".to_string(),
        "resto2@test.com".to_string(),
        "Jl. Kenyang No. 5".to_string(),
        "Warung".to_string(),
        "08234".to_string(),
        -6.22,
        106.82,
    );
    warung.reward_points = 80;
    warung.has_logged_in = true;

    let mut cafe = Partner::new(
        "Kopi Pagi".to_string(),
        "resto3@test.com".to_string(),
        "Jl. Kafein No. 10".to_string(),
        "Cafe".to_string(),
        "08345".to_string(),
        -6.20,
        106.83,
    );
    cafe.reward_points = 250;
    cafe.has_logged_in = true;

    let mut andi = User::new(
        "Andi".to_string(),
        "andi@test.com".to_string(),
        "08987".to_string(),
    );
    andi.has_logged_in = true;

    identities.insert_partner(&bakery)?;
    identities.insert_partner(&warung)?;
    identities.insert_partner(&cafe)?;
    identities.insert_user(&andi)?;

    let croissant = Listing {
        id: ListingId::generate(),
        partner_id: bakery.id,
        name: "Croissant Coklat".to_string(),
        description: Some("Crispy croissant with a premium chocolate filling.".to_string()),
        image_url: None,
        stock: 5,
        original_price: 20_000,
        discounted_price: 10_000,
        pickup_deadline: now + Duration::hours(2),
        surprise_meal: false,
        category: "Bakery".to_string(),
        pickup_address: bakery.address.clone(),
        pickup_lat: bakery.lat,
        pickup_lng: bakery.lng,
        quality_notes: Some("Freshly baked this morning.".to_string()),
        created_at: now,
    };

    let surprise_box = Listing {
        id: ListingId::generate(),
        partner_id: cafe.id,
        name: "Surprise Pastry Box".to_string(),
        description: Some(
            "A surprise box of assorted cakes and pastries picked by our chef. \
             Contents change every day!"
                .to_string(),
        ),
        image_url: None,
        stock: 10,
        original_price: 50_000,
        discounted_price: 0,
        pickup_deadline: now + Duration::hours(4),
        surprise_meal: true,
        category: "Pastry".to_string(),
        pickup_address: cafe.address.clone(),
        pickup_lat: cafe.lat,
        pickup_lng: cafe.lng,
        quality_notes: None,
        created_at: now,
    };

    let wholemeal = Listing {
        id: ListingId::generate(),
        partner_id: bakery.id,
        name: "Roti Gandum".to_string(),
        description: Some("Healthy whole-wheat bread, rich in fiber.".to_string()),
        image_url: None,
        stock: 2,
        original_price: 25_000,
        discounted_price: 0,
        pickup_deadline: now + Duration::minutes(30),
        surprise_meal: false,
        category: "Bakery".to_string(),
        pickup_address: bakery.address.clone(),
        pickup_lat: bakery.lat,
        pickup_lng: bakery.lng,
        quality_notes: Some("Best consumed today.".to_string()),
        created_at: now,
    };

    listings.insert(&croissant)?;
    listings.insert(&surprise_box)?;
    listings.insert(&wholemeal)?;

    Ok(DemoData {
        user: andi,
        partners: vec![bakery, warung, cafe],
        listings: vec![croissant, surprise_box, wholemeal],
    })
}
