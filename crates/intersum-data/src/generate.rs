use std::collections::HashSet;

use rand::Rng;
use rand::distr::Alphanumeric;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::errors::DatasetError;
use crate::model::{ClientRecord, DatasetParams, GeneratedDatasets};

/// Length, in characters, of every generated identifier.
pub const IDENTIFIER_LENGTH: usize = 32;

/// Generates paired server/client datasets with exactly
/// `params.intersection_size` identifiers in common, plus the true
/// intersection sum the protocol under test is expected to produce.
///
/// The RNG is injected so runs can be reproduced from a seed. Statistical
/// shuffling quality is all that is needed here; the output is dummy data,
/// not a security artifact.
///
/// Fails with [`DatasetError::InvalidArgument`] when the intersection size
/// exceeds either dataset size, when `max_associated_value` is negative, or
/// when `max_associated_value * intersection_size` overflows `i64`.
pub fn generate_random_datasets<R: Rng + ?Sized>(
    params: &DatasetParams,
    rng: &mut R,
) -> Result<GeneratedDatasets, DatasetError> {
    params.validate()?;

    info!(
        server_data_size = params.server_data_size,
        client_data_size = params.client_data_size,
        intersection_size = params.intersection_size,
        max_associated_value = params.max_associated_value,
        "generating datasets"
    );

    // Membership set of every token emitted in this call, across all three
    // pools. Local on purpose: calls never share collision state.
    let mut taken: HashSet<String> = HashSet::new();

    let shared: Vec<String> = (0..params.intersection_size)
        .map(|_| fresh_identifier(rng, &mut taken))
        .collect();
    let server_only: Vec<String> = (0..params.server_data_size - params.intersection_size)
        .map(|_| fresh_identifier(rng, &mut taken))
        .collect();
    let client_only: Vec<String> = (0..params.client_data_size - params.intersection_size)
        .map(|_| fresh_identifier(rng, &mut taken))
        .collect();

    let mut server_identifiers: Vec<String> =
        shared.iter().cloned().chain(server_only).collect();
    server_identifiers.shuffle(rng);

    let mut client_records: Vec<ClientRecord> = shared
        .into_iter()
        .chain(client_only)
        .map(|identifier| ClientRecord {
            identifier,
            associated_value: rng.random_range(0..=params.max_associated_value),
        })
        .collect();

    // The first intersection_size records are exactly the shared pool; the
    // sum must be taken before the shuffle reorders them. Cannot overflow:
    // validate() bounds max_associated_value * intersection_size.
    let intersection_sum: i64 = client_records[..params.intersection_size]
        .iter()
        .map(|record| record.associated_value)
        .sum();
    client_records.shuffle(rng);

    debug!(intersection_sum, "datasets generated");

    Ok(GeneratedDatasets {
        server_identifiers,
        client_records,
        intersection_sum,
    })
}

/// Draws a random alphanumeric token distinct from everything in `taken`,
/// recording it. Collisions at this length are astronomically unlikely, but
/// the resample loop keeps uniqueness a guarantee rather than an assumption.
fn fresh_identifier<R: Rng + ?Sized>(rng: &mut R, taken: &mut HashSet<String>) -> String {
    loop {
        let candidate: String = (0..IDENTIFIER_LENGTH)
            .map(|_| rng.sample(Alphanumeric) as char)
            .collect();
        if taken.insert(candidate.clone()) {
            return candidate;
        }
    }
}
