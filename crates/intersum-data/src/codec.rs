//! Headerless CSV codec for server and client datasets.
//!
//! Server files carry one identifier per line; client files carry
//! `identifier,value` lines. Write-then-read reproduces the original
//! sequence: same identifiers, same values, same order.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use csv::StringRecord;

use crate::bignum::BigNumContext;
use crate::errors::DatasetError;
use crate::model::ClientRecord;

/// Writes a server dataset, one identifier per line.
///
/// A failure mid-write may leave a partial file behind; it is still reported,
/// never masked.
pub fn write_server_dataset(
    path: impl AsRef<Path>,
    identifiers: &[String],
) -> Result<(), DatasetError> {
    let file = File::create(path.as_ref())?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));
    for identifier in identifiers {
        writer.write_record([identifier.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a client dataset, one `identifier,value` line per record.
pub fn write_client_dataset(
    path: impl AsRef<Path>,
    records: &[ClientRecord],
) -> Result<(), DatasetError> {
    let file = File::create(path.as_ref())?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));
    for record in records {
        writer.write_record([
            record.identifier.as_str(),
            record.associated_value.to_string().as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a server dataset back, one identifier per non-empty line, in file
/// order. Nothing is returned on failure; the result is built in full first.
pub fn read_server_dataset(path: impl AsRef<Path>) -> Result<Vec<String>, DatasetError> {
    let file = File::open(path.as_ref())?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut identifiers = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() != 1 {
            return Err(malformed(&record, "expected exactly one field"));
        }
        identifiers.push(record[0].to_string());
    }
    Ok(identifiers)
}

/// Reads a client dataset back, converting each value field through `context`
/// into the arbitrary-precision representation the protocol engine consumes.
///
/// Fails with [`DatasetError::MalformedRecord`] when a line does not split
/// into exactly two fields, or when its value field is not a valid
/// non-negative base-10 integer. A bad value is never coerced to zero.
pub fn read_client_dataset<C: BigNumContext>(
    path: impl AsRef<Path>,
    context: &C,
) -> Result<Vec<(String, C::BigNum)>, DatasetError> {
    let file = File::open(path.as_ref())?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() != 2 {
            return Err(malformed(&record, "expected identifier and value fields"));
        }
        let value = context
            .bignum_from_decimal(&record[1])
            .ok_or_else(|| malformed(&record, "value field is not a non-negative integer"))?;
        records.push((record[0].to_string(), value));
    }
    Ok(records)
}

fn malformed(record: &StringRecord, reason: &str) -> DatasetError {
    DatasetError::MalformedRecord {
        line: record.position().map_or(0, |position| position.line()),
        reason: reason.to_string(),
    }
}
