//! Numeric field generators.

use rand::Rng;

pub const YEAR_RANGE: (u16, u16) = (1400, 2022);
pub const PAGES_RANGE: (u16, u16) = (1, 1000);
pub const RATING_RANGE: (f64, f64) = (0.0, 5.0);
pub const PRICE_RANGE: (f64, f64) = (1.0, 2000.0);
/// Upper bound is exclusive.
pub const DISCOUNT_RANGE: (u8, u8) = (1, 99);

/// Generate a publication year (inclusive range).
pub fn generate_year<R: Rng>(rng: &mut R) -> u16 {
    rng.random_range(YEAR_RANGE.0..=YEAR_RANGE.1)
}

/// Generate a page count (inclusive range).
pub fn generate_pages<R: Rng>(rng: &mut R) -> u16 {
    rng.random_range(PAGES_RANGE.0..=PAGES_RANGE.1)
}

/// Generate an average rating rounded to 2 decimal places.
pub fn generate_rating<R: Rng>(rng: &mut R) -> f64 {
    round_to_cents(rng.random_range(RATING_RANGE.0..=RATING_RANGE.1))
}

/// Generate a price rounded to 2 decimal places.
pub fn generate_price<R: Rng>(rng: &mut R) -> f64 {
    round_to_cents(rng.random_range(PRICE_RANGE.0..=PRICE_RANGE.1))
}

/// Generate a discount percentage in `1..99`.
pub fn generate_discount<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(DISCOUNT_RANGE.0..DISCOUNT_RANGE.1)
}

/// Round to 2 decimal places.
///
/// Rounds the exact binary value, with exact ties going to the even digit, so
/// `2.675` (stored just below the tie) becomes `2.67` and `0.125` becomes `0.12`.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
