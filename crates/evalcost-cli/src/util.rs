use std::{fs, path::Path};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};

use evalcost_harness::table;

/// Creates a directory and its parents if missing.
pub fn ensure_dir<P>(path: P) -> anyhow::Result<()>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Writes a value as pretty JSON.
pub fn save_json<T, P>(file_kind: &str, path: P, value: &T) -> anyhow::Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize {file_kind}"))?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write {} file: {}", file_kind, path.display()))
}

/// Writes serde rows as a CSV table with a header row.
pub fn write_csv_file<T, P>(file_kind: &str, path: P, rows: &[T]) -> anyhow::Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    table::write_csv(path, rows)
        .with_context(|| format!("Failed to write {} table: {}", file_kind, path.display()))
}

/// Reads a whole CSV table into serde rows.
pub fn read_csv_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    table::read_csv(path)
        .with_context(|| format!("Failed to read {} table: {}", file_kind, path.display()))
}
