//! CSV serialization of image records

use crate::output::directory::ensure_directory;
use crate::output::types::{CsvHeaderItem, ImageRecord};
use crate::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes `records` to `{directory}/{file_name}`, replacing any existing file
///
/// The first row holds each header item's `title`; every following row holds,
/// per header item, the record field selected by its `id` (an empty cell when
/// the record has no such field).
///
/// # Arguments
///
/// * `directory` - Output directory, created if absent
/// * `file_name` - CSV file name inside `directory`
/// * `header` - Ordered column descriptors
/// * `records` - Rows to write, in order
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written file
/// * `Err(HarvestError)` - The directory or file could not be written
pub fn create_csv_file(
    directory: &Path,
    file_name: &str,
    header: &[CsvHeaderItem],
    records: &[ImageRecord],
) -> Result<PathBuf> {
    ensure_directory(directory)?;

    let path = directory.join(file_name);
    let file = std::fs::File::create(&path)?;
    write_csv(file, header, records)?;

    Ok(path)
}

/// Serializes header and records into any writer
pub fn write_csv<W: Write>(
    writer: W,
    header: &[CsvHeaderItem],
    records: &[ImageRecord],
) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(header.iter().map(|item| item.title.as_str()))?;

    for record in records {
        csv.write_record(
            header
                .iter()
                .map(|item| record.field(&item.id).unwrap_or_default()),
        )?;
    }

    csv.flush()?;
    Ok(())
}
