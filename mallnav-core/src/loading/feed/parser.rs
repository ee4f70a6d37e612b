use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::warn;

/// Reads every row of a topology CSV file, skipping rows that do not fit `T`
pub fn deserialize_feed_file<T>(path: &Path) -> Result<Vec<T>, std::io::Error>
where
    T: for<'de> serde::Deserialize<'de>,
{
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;

    let mut rows = Vec::new();
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(file);
    for (line, record) in reader.deserialize::<T>().enumerate() {
        match record {
            Ok(row) => rows.push(row),
            // line 1 is the header
            Err(e) => warn!("Skipping row {} of '{}': {e}", line + 2, path.display()),
        }
    }
    Ok(rows)
}
