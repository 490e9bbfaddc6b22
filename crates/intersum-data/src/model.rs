use serde::{Deserialize, Serialize};

use crate::errors::DatasetError;

/// Sizes and value bound for one generation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DatasetParams {
    /// Number of identifiers in the server dataset.
    pub server_data_size: usize,
    /// Number of (identifier, value) records in the client dataset.
    pub client_data_size: usize,
    /// Number of identifiers that must appear in both datasets.
    pub intersection_size: usize,
    /// Inclusive upper bound for client associated values.
    pub max_associated_value: i64,
}

impl DatasetParams {
    /// Checks the generation preconditions, reporting the first constraint
    /// that fails.
    pub fn validate(&self) -> Result<(), DatasetError> {
        if self.intersection_size > self.server_data_size {
            return Err(DatasetError::InvalidArgument(format!(
                "intersection size {} exceeds server dataset size {}",
                self.intersection_size, self.server_data_size
            )));
        }
        if self.intersection_size > self.client_data_size {
            return Err(DatasetError::InvalidArgument(format!(
                "intersection size {} exceeds client dataset size {}",
                self.intersection_size, self.client_data_size
            )));
        }
        if self.max_associated_value < 0 {
            return Err(DatasetError::InvalidArgument(format!(
                "max associated value must be >= 0, got {}",
                self.max_associated_value
            )));
        }
        // Every shared value is bounded by max_associated_value, so this also
        // bounds the intersection sum itself.
        let intersection = i64::try_from(self.intersection_size).ok();
        if intersection
            .and_then(|size| self.max_associated_value.checked_mul(size))
            .is_none()
        {
            return Err(DatasetError::InvalidArgument(format!(
                "max associated value {} times intersection size {} overflows i64",
                self.max_associated_value, self.intersection_size
            )));
        }
        Ok(())
    }
}

/// One client row: an identifier and the value to be summed over the
/// intersection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub identifier: String,
    pub associated_value: i64,
}

/// Result of one generation run, produced atomically.
#[derive(Debug, Clone)]
pub struct GeneratedDatasets {
    /// Server identifiers, in shuffled order.
    pub server_identifiers: Vec<String>,
    /// Client records, shuffled independently of the server order.
    pub client_records: Vec<ClientRecord>,
    /// Ground-truth sum of the shared identifiers' associated values.
    pub intersection_sum: i64,
}
