use chrono::{DateTime, Utc};
use rand::Rng;
use crate::catalog::domain::{SampleQuery, SampleSet};
use crate::records::domain::model::BookRecord;

pub(crate) const DEFAULT_SAMPLE_COUNT: usize = 5;
pub(crate) const MAX_SAMPLE_COUNT: usize = 20;

pub(crate) fn eligible<'a>(records: &'a [BookRecord], include_out_of_stock: bool) -> Vec<&'a BookRecord> {
    records.iter()
        .filter(|record| include_out_of_stock || record.in_stock())
        .collect()
}

// Fisher-Yates over the eligible pool, then the first min(count, n) elements.
// Uniform over permutations, hence uniform over all C(n, k) subsets.
pub(crate) fn draw<R: Rng>(mut pool: Vec<&BookRecord>, count: usize, rng: &mut R) -> Vec<BookRecord> {
    for i in (1..pool.len()).rev() {
        let j = rng.gen_range(0..=i);
        pool.swap(i, j);
    }
    let actual = count.min(pool.len());
    pool.into_iter().take(actual).cloned().collect()
}

pub(crate) fn sample_records(records: &[BookRecord], query: &SampleQuery,
                             last_updated: DateTime<Utc>) -> SampleSet {
    let pool = eligible(records, query.include_out_of_stock);
    let total = pool.len();
    let recommendations = draw(pool, query.count, &mut rand::thread_rng());
    SampleSet {
        recommendations,
        total,
        last_updated,
    }
}
