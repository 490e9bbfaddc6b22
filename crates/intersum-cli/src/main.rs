use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use intersum_data::{
    DatasetError, DatasetParams, generate_random_datasets, write_client_dataset,
    write_server_dataset,
};

#[derive(Debug, Error)]
enum CliError {
    #[error("dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generate dummy server/client datasets for intersection-sum protocol tests.
#[derive(Parser, Debug)]
#[command(name = "intersum", version, about)]
struct Cli {
    /// Number of identifiers in the server dataset.
    #[arg(long, default_value_t = 100)]
    server_data_size: usize,
    /// Number of (identifier, value) records in the client dataset.
    #[arg(long, default_value_t = 100)]
    client_data_size: usize,
    /// Number of identifiers common to both datasets.
    #[arg(long, default_value_t = 50)]
    intersection_size: usize,
    /// Inclusive upper bound for client associated values.
    #[arg(long, default_value_t = 100)]
    max_associated_value: i64,
    /// Seed for the (non-cryptographic) generator; drawn from the OS when
    /// omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Output path for the server dataset.
    #[arg(long, default_value = "server_data.csv")]
    server_data_file: PathBuf,
    /// Output path for the client dataset.
    #[arg(long, default_value = "client_data.csv")]
    client_data_file: PathBuf,
    /// Optional path for a JSON summary of the run, including the expected
    /// intersection sum.
    #[arg(long)]
    summary_file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    params: DatasetParams,
    seed: Option<u64>,
    intersection_sum: i64,
    server_data_file: PathBuf,
    client_data_file: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let params = DatasetParams {
        server_data_size: cli.server_data_size,
        client_data_size: cli.client_data_size,
        intersection_size: cli.intersection_size,
        max_associated_value: cli.max_associated_value,
    };

    let mut rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };

    let datasets = generate_random_datasets(&params, &mut rng)?;
    write_server_dataset(&cli.server_data_file, &datasets.server_identifiers)?;
    write_client_dataset(&cli.client_data_file, &datasets.client_records)?;

    info!(
        server_data_file = %cli.server_data_file.display(),
        client_data_file = %cli.client_data_file.display(),
        intersection_sum = datasets.intersection_sum,
        "datasets written"
    );

    if let Some(path) = &cli.summary_file {
        let summary = RunSummary {
            params,
            seed: cli.seed,
            intersection_sum: datasets.intersection_sum,
            server_data_file: cli.server_data_file.clone(),
            client_data_file: cli.client_data_file.clone(),
        };
        std::fs::write(path, serde_json::to_vec_pretty(&summary)?)?;
    }

    println!("Expected intersection sum: {}", datasets.intersection_sum);
    Ok(())
}
