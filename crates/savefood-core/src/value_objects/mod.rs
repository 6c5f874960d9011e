//! Value objects - immutable types that represent domain concepts

mod ids;
mod reservation_code;

pub use ids::{IdParseError, ListingId, PartnerId, ReservationId, UserId};
pub use reservation_code::{
    generate_reservation_code, ReservationCode, CODE_LENGTH, QR_PREFIX,
};
