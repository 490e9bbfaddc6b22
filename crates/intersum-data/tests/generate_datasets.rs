use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use intersum_data::{
    DatasetError, DatasetParams, IDENTIFIER_LENGTH, generate_random_datasets,
};

fn params(
    server_data_size: usize,
    client_data_size: usize,
    intersection_size: usize,
    max_associated_value: i64,
) -> DatasetParams {
    DatasetParams {
        server_data_size,
        client_data_size,
        intersection_size,
        max_associated_value,
    }
}

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

#[test]
fn scenario_100_100_20_matches_requested_shape() {
    let datasets =
        generate_random_datasets(&params(100, 100, 20, 50), &mut rng(1)).expect("generate");

    assert_eq!(datasets.server_identifiers.len(), 100);
    assert_eq!(datasets.client_records.len(), 100);

    let server: HashSet<&str> = datasets
        .server_identifiers
        .iter()
        .map(String::as_str)
        .collect();
    let client: HashSet<&str> = datasets
        .client_records
        .iter()
        .map(|record| record.identifier.as_str())
        .collect();
    assert_eq!(server.len(), 100, "server identifiers must be unique");
    assert_eq!(client.len(), 100, "client identifiers must be unique");
    assert_eq!(server.intersection(&client).count(), 20);

    for record in &datasets.client_records {
        assert!((0..=50).contains(&record.associated_value));
    }

    let expected_sum: i64 = datasets
        .client_records
        .iter()
        .filter(|record| server.contains(record.identifier.as_str()))
        .map(|record| record.associated_value)
        .sum();
    assert_eq!(datasets.intersection_sum, expected_sum);
    assert!(datasets.intersection_sum <= 20 * 50);
}

#[test]
fn identifiers_are_fixed_length_alphanumeric() {
    let datasets =
        generate_random_datasets(&params(30, 30, 10, 5), &mut rng(2)).expect("generate");

    for identifier in datasets
        .server_identifiers
        .iter()
        .chain(datasets.client_records.iter().map(|record| &record.identifier))
    {
        assert_eq!(identifier.len(), IDENTIFIER_LENGTH);
        assert!(identifier.chars().all(|ch| ch.is_ascii_alphanumeric()));
    }
}

#[test]
fn zero_intersection_yields_disjoint_datasets_and_zero_sum() {
    let datasets =
        generate_random_datasets(&params(25, 30, 0, 1000), &mut rng(3)).expect("generate");

    let server: HashSet<&str> = datasets
        .server_identifiers
        .iter()
        .map(String::as_str)
        .collect();
    assert!(
        datasets
            .client_records
            .iter()
            .all(|record| !server.contains(record.identifier.as_str()))
    );
    assert_eq!(datasets.intersection_sum, 0);
}

#[test]
fn server_dataset_may_be_entirely_shared() {
    let datasets =
        generate_random_datasets(&params(10, 40, 10, 7), &mut rng(4)).expect("generate");

    let client: HashSet<&str> = datasets
        .client_records
        .iter()
        .map(|record| record.identifier.as_str())
        .collect();
    assert!(
        datasets
            .server_identifiers
            .iter()
            .all(|identifier| client.contains(identifier.as_str()))
    );
}

#[test]
fn empty_client_dataset_is_valid_when_intersection_is_zero() {
    let datasets =
        generate_random_datasets(&params(3, 0, 0, 10), &mut rng(5)).expect("generate");

    assert_eq!(datasets.server_identifiers.len(), 3);
    assert!(datasets.client_records.is_empty());
    assert_eq!(datasets.intersection_sum, 0);
}

#[test]
fn zero_value_bound_pins_every_value_to_zero() {
    let datasets =
        generate_random_datasets(&params(20, 20, 20, 0), &mut rng(6)).expect("generate");

    assert!(
        datasets
            .client_records
            .iter()
            .all(|record| record.associated_value == 0)
    );
    assert_eq!(datasets.intersection_sum, 0);
}

#[test]
fn rejects_intersection_larger_than_either_dataset() {
    let err = generate_random_datasets(&params(5, 5, 6, 10), &mut rng(7))
        .expect_err("intersection exceeds both sizes");
    assert!(matches!(err, DatasetError::InvalidArgument(_)), "{err}");

    let err = generate_random_datasets(&params(10, 4, 5, 10), &mut rng(7))
        .expect_err("intersection exceeds client size");
    assert!(matches!(err, DatasetError::InvalidArgument(_)), "{err}");
}

#[test]
fn rejects_negative_value_bound() {
    let err = generate_random_datasets(&params(5, 5, 2, -1), &mut rng(8))
        .expect_err("negative bound");
    assert!(matches!(err, DatasetError::InvalidArgument(_)), "{err}");
}

#[test]
fn rejects_value_bound_whose_sum_could_overflow() {
    let err = generate_random_datasets(&params(20, 20, 10, 1 << 62), &mut rng(9))
        .expect_err("2^62 * 10 exceeds i64::MAX");
    assert!(matches!(err, DatasetError::InvalidArgument(_)), "{err}");

    // The product bound itself is fine when it stays representable.
    generate_random_datasets(&params(20, 20, 1, i64::MAX), &mut rng(9))
        .expect("i64::MAX * 1 is representable");
}

#[test]
fn fixed_seed_reproduces_the_run() {
    let spec = params(40, 35, 12, 99);
    let first = generate_random_datasets(&spec, &mut rng(42)).expect("first run");
    let second = generate_random_datasets(&spec, &mut rng(42)).expect("second run");

    assert_eq!(first.server_identifiers, second.server_identifiers);
    assert_eq!(first.client_records, second.client_records);
    assert_eq!(first.intersection_sum, second.intersection_sum);

    let other = generate_random_datasets(&spec, &mut rng(43)).expect("other seed");
    assert_ne!(first.server_identifiers, other.server_identifiers);
}
