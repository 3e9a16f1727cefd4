//! Main generator producing fixture records.

use crate::generators::generate_fields;
use crate::record::Record;
use crate::titles::TitleSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

/// Primary key of the first record unless overridden.
pub const DEFAULT_START_PK: u64 = 1;

/// Generator that produces an endless sequence of book records.
///
/// The generator is also an [`Iterator`]; bound it with
/// [`BookGenerator::batch`] or [`Iterator::take`]. It only ends once the
/// record with primary key `u64::MAX` has been produced.
pub struct BookGenerator<R = StdRng> {
    /// Model label copied into every record
    model: String,
    /// Titles to pick from
    titles: TitleSource,
    /// Random source for all field values
    rng: R,
    /// Primary key of the next record; `None` once the key space is used up
    pk: Option<u64>,
}

impl BookGenerator<StdRng> {
    /// Create a generator with a seeded RNG for reproducible output.
    pub fn seeded(model: impl Into<String>, titles: TitleSource, seed: u64) -> Self {
        Self::new(model, titles, StdRng::seed_from_u64(seed))
    }

    /// Create a generator with an RNG seeded from OS entropy.
    pub fn from_entropy(model: impl Into<String>, titles: TitleSource) -> Self {
        Self::new(model, titles, StdRng::from_os_rng())
    }
}

impl<R: Rng> BookGenerator<R> {
    /// Create a new generator starting at [`DEFAULT_START_PK`].
    pub fn new(model: impl Into<String>, titles: TitleSource, rng: R) -> Self {
        Self {
            model: model.into(),
            titles,
            rng,
            pk: Some(DEFAULT_START_PK),
        }
    }

    /// Set the primary key of the next record.
    pub fn with_start_pk(mut self, pk: u64) -> Self {
        self.pk = Some(pk);
        self
    }

    /// Get the primary key the next record will receive.
    ///
    /// Returns `None` after the record with key `u64::MAX`.
    pub fn current_pk(&self) -> Option<u64> {
        self.pk
    }

    /// Model label copied into every record.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate the next record and advance the primary key by one.
    ///
    /// Returns `None` once the primary key would overflow.
    pub fn next_record(&mut self) -> Option<Record> {
        let pk = self.pk?;
        let fields = generate_fields(&mut self.rng, &self.titles);
        self.pk = pk.checked_add(1);

        trace!(pk, title = %fields.title, "generated record");

        Some(Record {
            model: self.model.clone(),
            pk,
            fields,
        })
    }

    /// Generate the next `count` records.
    pub fn batch(&mut self, count: usize) -> Vec<Record> {
        self.by_ref().take(count).collect()
    }
}

impl<R: Rng> Iterator for BookGenerator<R> {
    type Item = Record;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::titles::DEFAULT_TITLES;

    fn default_titles() -> TitleSource {
        TitleSource::new(DEFAULT_TITLES.map(String::from).to_vec()).unwrap()
    }

    #[test]
    fn test_generate_single_record() {
        let mut generator = BookGenerator::seeded("books.book", default_titles(), 42);

        let record = generator.next_record().unwrap();

        assert_eq!(record.model, generator.model());
        assert_eq!(record.pk, 1);
        assert!(DEFAULT_TITLES.contains(&record.fields.title.as_str()));
        assert!((1400..=2022).contains(&record.fields.year));
        assert!((1..=1000).contains(&record.fields.pages));
        assert!((1..=98).contains(&record.fields.discount));
        assert!((1..=3).contains(&record.fields.author.len()));
    }

    #[test]
    fn test_single_title_scenario() {
        let titles = TitleSource::new(vec!["Сон".to_string()]).unwrap();
        let mut generator = BookGenerator::seeded("books.book", titles, 1);

        let records = generator.batch(3);

        assert_eq!(records.iter().map(|r| r.pk).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(records.iter().all(|r| r.fields.title == "Сон"));
    }

    #[test]
    fn test_pk_sequence_from_start() {
        let mut generator =
            BookGenerator::seeded("books.book", default_titles(), 42).with_start_pk(10);

        let records = generator.batch(50);

        assert_eq!(records.len(), 50);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.pk, 10 + i as u64);
        }
    }

    #[test]
    fn test_deterministic_generation() {
        let mut gen1 = BookGenerator::seeded("books.book", default_titles(), 42);
        let mut gen2 = BookGenerator::seeded("books.book", default_titles(), 42);

        assert_eq!(gen1.batch(20), gen2.batch(20));
    }

    #[test]
    fn test_current_pk() {
        let mut generator = BookGenerator::seeded("books.book", default_titles(), 42);

        assert_eq!(generator.current_pk(), Some(1));
        generator.next_record().unwrap();
        assert_eq!(generator.current_pk(), Some(2));
        generator.next().unwrap();
        assert_eq!(generator.current_pk(), Some(3));
    }

    #[test]
    fn test_batch_continues_sequence() {
        let mut generator = BookGenerator::seeded("books.book", default_titles(), 42);

        let first = generator.batch(3);
        let second = generator.batch(2);

        assert_eq!(first.last().unwrap().pk, 3);
        assert_eq!(second.iter().map(|r| r.pk).collect::<Vec<_>>(), vec![4, 5]);
    }

    #[test]
    fn test_from_entropy_respects_ranges() {
        let mut generator = BookGenerator::from_entropy("books.book", default_titles());

        for record in generator.by_ref().take(100) {
            assert!((1400..=2022).contains(&record.fields.year));
            assert!((0.0..=5.0).contains(&record.fields.rating));
            assert!((1.0..=2000.0).contains(&record.fields.price));
        }
        assert_eq!(generator.current_pk(), Some(101));
    }

    #[test]
    fn test_sequence_ends_at_max_pk() {
        let mut generator =
            BookGenerator::seeded("books.book", default_titles(), 1).with_start_pk(u64::MAX - 1);

        let records = generator.batch(5);

        assert_eq!(
            records.iter().map(|r| r.pk).collect::<Vec<_>>(),
            vec![u64::MAX - 1, u64::MAX]
        );
        assert_eq!(generator.current_pk(), None);
        assert!(generator.next_record().is_none());
    }

    #[test]
    fn test_start_at_max_pk() {
        let mut generator =
            BookGenerator::seeded("books.book", default_titles(), 1).with_start_pk(u64::MAX);

        let record = generator.next_record().unwrap();
        assert_eq!(record.pk, u64::MAX);
        assert!(generator.next().is_none());
    }
}
