//! Synthetic test data for private intersection-sum protocols.
//!
//! This crate generates paired server/client datasets with an exactly
//! controlled identifier overlap and a precomputed ground-truth intersection
//! sum, and moves those datasets to and from headerless CSV files so they can
//! be fed to (or captured from) a protocol engine under test.

pub mod bignum;
pub mod codec;
pub mod errors;
pub mod generate;
pub mod model;

pub use bignum::{BigNumContext, BigUintContext};
pub use codec::{
    read_client_dataset, read_server_dataset, write_client_dataset, write_server_dataset,
};
pub use errors::DatasetError;
pub use generate::{IDENTIFIER_LENGTH, generate_random_datasets};
pub use model::{ClientRecord, DatasetParams, GeneratedDatasets};
