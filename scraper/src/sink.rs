use crate::error::Result;
use common::{COLUMNS, MergedRecord};
use std::path::Path;

/// Writes all records to `destination`, replacing any existing file.
///
/// The header row is always written, even for an empty run. Returns the
/// number of data rows.
pub fn write_records(records: &[MergedRecord], destination: impl AsRef<Path>) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(destination.as_ref())?;

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::info!(rows = records.len(), path = %destination.as_ref().display(), "records written");
    Ok(records.len())
}
