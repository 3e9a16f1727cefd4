//! Individual field generators.
//!
//! Each generator draws from the RNG it is handed and shares no other state,
//! so a seeded RNG reproduces the same values.

pub mod isbn;
pub mod numeric;
pub mod person;

use crate::record::FieldSet;
use crate::titles::TitleSource;
use rand::Rng;

pub use isbn::generate_isbn13;
pub use numeric::{
    generate_discount, generate_pages, generate_price, generate_rating, generate_year,
};
pub use person::generate_authors;

/// Generate the book attributes of one record.
///
/// Fields are drawn in serialization order, so the RNG stream is stable.
pub fn generate_fields<R: Rng>(rng: &mut R, titles: &TitleSource) -> FieldSet {
    let title = titles.pick(rng).to_string();
    let year = generate_year(rng);
    let pages = generate_pages(rng);
    let isbn13 = generate_isbn13(rng);
    let rating = generate_rating(rng);
    let price = generate_price(rng);
    let discount = generate_discount(rng);
    let author = generate_authors(rng);

    FieldSet {
        title,
        year,
        pages,
        isbn13,
        rating,
        price,
        discount,
        author,
    }
}
