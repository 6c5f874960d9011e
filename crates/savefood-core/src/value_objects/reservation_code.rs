//! Reservation code - the short human-readable pickup code
//!
//! Codes are 6 characters drawn from `A-Z0-9`, compared case-insensitively,
//! and displayed uppercase. The scannable payload prepends a fixed namespace
//! prefix so a scanner can tell our codes apart from arbitrary text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Number of characters in a reservation code
pub const CODE_LENGTH: usize = 6;

/// Namespace prefix for the scannable payload
pub const QR_PREFIX: &str = "SAVEFOOD_";

const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a random reservation code
///
/// Uniqueness against other active reservations is the ledger's job; the
/// generator only guarantees length and alphabet.
#[must_use]
pub fn generate_reservation_code() -> ReservationCode {
    use rand::Rng;

    let mut rng = rand::thread_rng();
    let raw: String = (0..CODE_LENGTH)
        .map(|_| CHARSET[rng.gen_range(0..CHARSET.len())] as char)
        .collect();
    ReservationCode(raw)
}

/// A normalized (uppercase) reservation code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationCode(String);

impl ReservationCode {
    /// Parse user- or scanner-entered input into a code.
    ///
    /// Accepts the raw 6-character code or the prefixed scannable payload;
    /// whitespace is trimmed and the comparison is case-insensitive.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        // Scanners may hand back the payload in any case
        let stripped = match trimmed.as_bytes().split_at_checked(QR_PREFIX.len()) {
            Some((head, _)) if head.eq_ignore_ascii_case(QR_PREFIX.as_bytes()) => {
                &trimmed[QR_PREFIX.len()..]
            }
            _ => trimmed,
        };

        let normalized = stripped.to_ascii_uppercase();
        if normalized.len() != CODE_LENGTH
            || !normalized.bytes().all(|b| CHARSET.contains(&b))
        {
            return Err(DomainError::InvalidCode(input.trim().to_string()));
        }
        Ok(Self(normalized))
    }

    /// The uppercase display form
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The scannable payload: namespace prefix + code
    #[must_use]
    pub fn qr_payload(&self) -> String {
        format!("{QR_PREFIX}{}", self.0)
    }
}

impl fmt::Display for ReservationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
