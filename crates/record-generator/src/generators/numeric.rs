//! Numeric value generators.

use rand::Rng;

/// Lowest phone number handed out (inclusive).
pub const PHONE_MIN: u32 = 900_000_000;
/// Highest phone number handed out (inclusive).
pub const PHONE_MAX: u32 = 999_999_999;

/// Generate a 9-digit phone number, uniform over `PHONE_MIN..=PHONE_MAX`.
pub fn generate_phone<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(PHONE_MIN..=PHONE_MAX)
}
