use crate::pipeline::{Aggregation, Bucket, aggregate};
use crate::qmgr::DeliveryRecord;
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 6, 15)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn record(id: &str, timestamp: NaiveDateTime, size_bytes: u64) -> DeliveryRecord {
    DeliveryRecord {
        message_id: id.to_string(),
        timestamp,
        size_bytes,
    }
}

#[test]
fn same_second_records_share_a_bucket() {
    // Arrange
    let records = vec![
        record("A", at(10, 22, 31), 4096),
        record("B", at(10, 22, 31), 2048),
    ];

    // Act
    let agg = aggregate(&records);

    // Assert
    assert_eq!(agg.len(), 1);
    assert_eq!(
        agg.get(&at(10, 22, 31)),
        Some(&Bucket {
            timestamp: at(10, 22, 31),
            message_count: 2,
            total_size_bytes: 6144,
        })
    );
}

#[test]
fn buckets_iterate_in_ascending_time_order() {
    // Arrange
    let records = vec![
        record("C", at(12, 0, 0), 3),
        record("A", at(9, 0, 0), 1),
        record("B", at(10, 30, 0), 2),
    ];

    // Act
    let agg = aggregate(&records);

    // Assert
    let order: Vec<_> = agg.buckets().map(|b| b.timestamp).collect();
    assert_eq!(order, vec![at(9, 0, 0), at(10, 30, 0), at(12, 0, 0)]);
}

#[test]
fn distinct_days_at_same_time_do_not_collapse() {
    // Arrange
    let other_day = NaiveDate::from_ymd_opt(2023, 6, 16)
        .unwrap()
        .and_hms_opt(10, 22, 31)
        .unwrap();
    let records = vec![record("A", at(10, 22, 31), 1), record("B", other_day, 1)];

    // Act
    let agg = aggregate(&records);

    // Assert
    assert_eq!(agg.len(), 2);
    assert!(agg.buckets().all(|b| b.message_count == 1));
}

#[test]
fn record_order_does_not_matter() {
    // Arrange
    let records = vec![
        record("A", at(1, 0, 0), 10),
        record("B", at(2, 0, 0), 20),
        record("C", at(1, 0, 0), 30),
    ];
    let reversed: Vec<_> = records.iter().rev().cloned().collect();

    // Assert
    assert_eq!(aggregate(&records), aggregate(&reversed));
}

#[test]
fn merging_two_passes_equals_one_pass_over_both() {
    // Arrange
    let first = vec![record("A", at(1, 0, 0), 10), record("B", at(2, 0, 0), 20)];
    let second = vec![record("C", at(2, 0, 0), 5), record("D", at(3, 0, 0), 7)];
    let both: Vec<_> = first.iter().chain(second.iter()).cloned().collect();

    // Act
    let mut merged = aggregate(&first);
    merged.merge(aggregate(&second));

    // Assert
    assert_eq!(merged, aggregate(&both));
    assert_eq!(merged.get(&at(2, 0, 0)).unwrap().total_size_bytes, 25);
}

#[test]
fn empty_input_yields_empty_aggregation() {
    let agg = aggregate(&Vec::<DeliveryRecord>::new());

    assert!(agg.is_empty());
    assert_eq!(agg, Aggregation::new());
}

#[test]
fn sizes_beyond_u64_are_summed_without_overflow() {
    // Arrange
    let records = vec![
        record("A", at(4, 0, 0), u64::MAX),
        record("B", at(4, 0, 0), u64::MAX),
    ];

    // Act
    let mut agg = aggregate(&records);
    agg.merge(aggregate(&records));

    // Assert
    let bucket = agg.get(&at(4, 0, 0)).unwrap();
    assert_eq!(bucket.message_count, 4);
    assert_eq!(bucket.total_size_bytes, u128::from(u64::MAX) * 4);
}
