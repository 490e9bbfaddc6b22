use thiserror::Error;

/// Errors emitted by the dataset generator and the CSV codec.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },
}
