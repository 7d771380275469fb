//! The immutable row store.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use super::Record;

/// The fixed (name, email, age) templates rows are sampled from.
const TEMPLATES: [(&str, &str, u8); 3] = [
    ("Customer 1", "email1@user.com", 24),
    ("Customer 2", "email2@user.com", 28),
    ("Customer 3", "email3@user.com", 28),
];

/// The default number of rows generated at startup.
pub const DEFAULT_ROW_COUNT: usize = 5000;

/// An ordered, read-only sequence of customer records.
///
/// Generated once at startup and never mutated afterwards; everything else in
/// the application addresses rows by index into this store.
#[derive(Debug, Clone)]
pub struct RowStore {
    records: Vec<Record>,
}

impl RowStore {
    /// Generate `count` records by sampling a template uniformly at random
    /// for each sequential id, starting at 1. Ids are u32, so at most
    /// `u32::MAX` rows are generated.
    pub fn generate<R: Rng>(count: usize, rng: &mut R) -> Self {
        let count = count.min(u32::MAX as usize);
        let records = (0..count)
            .map(|i| {
                // TEMPLATES is non-empty, so choose never returns None.
                let (name, email, age) = TEMPLATES.choose(rng).copied().unwrap_or(TEMPLATES[0]);
                Record::new(i as u32 + 1, name, email, age)
            })
            .collect();
        debug!(count, "generated row store");
        Self { records }
    }

    /// Build a store from explicit records. Used by tests and demos.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// The number of rows in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The row at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// All rows, in store order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
