use std::path::Path;
use tracing::info;

use crate::domain::{HEADER, LocationRow};
use crate::error::Result;

/// Write the header and `rows` to a CSV file at `path`.
///
/// The file is created or truncated. Quoting follows RFC 4180: a field is
/// quoted only when it holds a comma, a quote or a line break, and embedded
/// quotes are doubled. A failure part way through can leave a partial file.
///
/// # Returns
/// * Number of data rows written (the header is not counted)
pub fn write_csv(path: &Path, rows: &[LocationRow]) -> Result<usize> {
    info!(path = %path.display(), rows = rows.len(), "writing CSV");

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }
    writer.flush()?;

    Ok(rows.len())
}
