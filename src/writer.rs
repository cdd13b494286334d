//! Monthly CSV output.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::WriteError;
use crate::model::{MonthlyBatch, CSV_HEADER};

/// UTF-8 byte-order mark, so spreadsheet tools detect the encoding.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes `batch` to `{output_dir}/YYYYMM.csv`, overwriting any existing file.
///
/// Returns `Ok(None)` without touching the filesystem when the batch is empty.
pub fn write_month(batch: &MonthlyBatch, output_dir: &Path) -> Result<Option<PathBuf>, WriteError> {
    if batch.is_empty() {
        return Ok(None);
    }

    let path = output_dir.join(batch.file_name());
    tracing::debug!("Writing {} rows to {}", batch.len(), path.display());

    let mut file = File::create(&path)?;
    file.write_all(UTF8_BOM)?;

    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(CSV_HEADER)?;
    for record in batch.records() {
        wtr.write_record(record.fields())?;
    }
    wtr.flush()?;

    Ok(Some(path))
}
