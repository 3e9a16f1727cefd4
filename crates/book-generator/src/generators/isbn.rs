//! ISBN-13 fabrication.
//!
//! Produces hyphenated strings such as `978-5-389-07435-1`: an EAN prefix, a
//! registration group, a registrant, a publication number and a check digit.
//! Group and element lengths look plausible but are not checked against the
//! real range tables.

use rand::Rng;

const GROUPS_978: &[&str] = &[
    "0", "1", "2", "3", "4", "5", "7", "80", "85", "88", "91", "952",
];
const GROUPS_979: &[&str] = &["8", "10", "11", "12"];

/// Registration groups available under each EAN prefix.
const REGISTRATION_GROUPS: [(&str, &[&str]); 2] = [("978", GROUPS_978), ("979", GROUPS_979)];

/// Digits shared by group, registrant and publication.
const BODY_DIGITS: usize = 9;

/// Generate a random ISBN-13 with a valid check digit.
pub fn generate_isbn13<R: Rng>(rng: &mut R) -> String {
    let (prefix, groups) = REGISTRATION_GROUPS[rng.random_range(0..REGISTRATION_GROUPS.len())];
    let group = groups[rng.random_range(0..groups.len())];

    let remaining = BODY_DIGITS - group.len();
    let registrant_len = rng.random_range(2..remaining);
    let registrant = random_digits(rng, registrant_len);
    let publication = random_digits(rng, remaining - registrant_len);

    let digits = format!("{prefix}{group}{registrant}{publication}");
    let check = check_digit(&digits);

    format!("{prefix}-{group}-{registrant}-{publication}-{check}")
}

/// Compute the ISBN-13 check digit over the first 12 digits.
///
/// Non-digit characters are ignored.
pub fn check_digit(digits: &str) -> u32 {
    let sum: u32 = digits
        .chars()
        .filter_map(|c| c.to_digit(10))
        .take(12)
        .enumerate()
        .map(|(i, d)| if i % 2 == 0 { d } else { d * 3 })
        .sum();
    (10 - sum % 10) % 10
}

fn random_digits<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}
