use crate::qmgr::DeliveryRecord;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Messages accepted within one second.
///
/// Sizes are summed as `u128` so that totals of `u64` sizes cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub timestamp: NaiveDateTime,
    pub message_count: u64,
    pub total_size_bytes: u128,
}

impl Bucket {
    fn new(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp,
            message_count: 0,
            total_size_bytes: 0,
        }
    }
}

/// Buckets keyed by exact timestamp, iterated in ascending time order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    buckets: BTreeMap<NaiveDateTime, Bucket>,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &DeliveryRecord) {
        let bucket = self
            .buckets
            .entry(record.timestamp)
            .or_insert_with(|| Bucket::new(record.timestamp));

        bucket.message_count += 1;
        bucket.total_size_bytes += u128::from(record.size_bytes);
    }

    /// Folds `other` into `self` bucket by bucket.
    pub fn merge(&mut self, other: Aggregation) {
        for (timestamp, bucket) in other.buckets {
            match self.buckets.entry(timestamp) {
                Entry::Vacant(slot) => {
                    slot.insert(bucket);
                }
                Entry::Occupied(mut slot) => {
                    let existing = slot.get_mut();
                    existing.message_count += bucket.message_count;
                    existing.total_size_bytes += bucket.total_size_bytes;
                }
            }
        }
    }

    pub fn get(&self, timestamp: &NaiveDateTime) -> Option<&Bucket> {
        self.buckets.get(timestamp)
    }

    pub fn buckets(&self) -> impl Iterator<Item = &Bucket> {
        self.buckets.values()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

impl<'a> FromIterator<&'a DeliveryRecord> for Aggregation {
    fn from_iter<I: IntoIterator<Item = &'a DeliveryRecord>>(iter: I) -> Self {
        let mut agg = Aggregation::new();
        for record in iter {
            agg.push(record);
        }
        agg
    }
}

pub fn aggregate<'a, I>(records: I) -> Aggregation
where
    I: IntoIterator<Item = &'a DeliveryRecord>,
{
    records.into_iter().collect()
}
