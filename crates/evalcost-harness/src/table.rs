//! CSV tables and the bracketed-list cell codec.
//!
//! Every experiment exchanges data through columnar text files with a header
//! row. Scalar columns map straight onto serde; list-valued columns (all
//! per-design scores for one resolution, a whole ranking) are serialized as
//! bracketed text like `"[0.42, 0.37, 0.44]"` inside a single cell. The
//! parser accepts both comma-space and bare-space separators, matching the
//! historical files the figure commands must read back.

use std::{fmt::Display, fs::File, io, path::Path, str::FromStr};

use serde::{Serialize, de::DeserializeOwned};

/// Error raised while reading or writing a table.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum TableError {
    /// CSV-level failure: missing file, malformed row, type mismatch.
    #[display("table error: {_0}")]
    Csv(csv::Error),
    /// Raw I/O failure.
    #[display("table I/O error: {_0}")]
    Io(io::Error),
}

/// Error raised when a bracketed list cell cannot be parsed.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("malformed bracketed list cell: {cell:?}")]
pub struct ParseBracketedError {
    /// The cell text that failed to parse.
    pub cell: String,
}

/// Writes `rows` as a CSV file with a header row.
pub fn write_csv<T, P>(path: P, rows: &[T]) -> Result<(), TableError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads every row of a CSV file with a header row.
///
/// Any malformed row aborts the read; there is no partial recovery.
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>, TableError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref()).map_err(TableError::Io)?;
    let mut reader = csv::Reader::from_reader(io::BufReader::new(file));
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Formats values as a bracketed list cell: `[a, b, c]`.
#[must_use]
pub fn format_bracketed<T>(values: &[T]) -> String
where
    T: Display,
{
    let mut cell = String::from("[");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            cell.push_str(", ");
        }
        cell.push_str(&value.to_string());
    }
    cell.push(']');
    cell
}

/// Parses a bracketed list cell back into values.
///
/// Accepts `[1, 2, 3]` and `[1 2 3]`; the surrounding brackets are
/// optional. An empty list (`[]`) parses to an empty vector.
///
/// # Errors
///
/// Returns [`ParseBracketedError`] when any element fails to parse.
pub fn parse_bracketed<T>(cell: &str) -> Result<Vec<T>, ParseBracketedError>
where
    T: FromStr,
{
    let inner = cell.trim().trim_start_matches('[').trim_end_matches(']').trim();
    if inner.is_empty() {
        return Ok(Vec::new());
    }

    let parts: Vec<&str> = if inner.contains(',') {
        inner.split(',').map(str::trim).collect()
    } else {
        inner.split_whitespace().collect()
    };

    parts
        .into_iter()
        .map(|part| {
            part.parse().map_err(|_| ParseBracketedError {
                cell: cell.to_owned(),
            })
        })
        .collect()
}
