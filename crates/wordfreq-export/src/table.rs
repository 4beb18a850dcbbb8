use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use wordfreq_core::frequency::FrequencyTable;

use crate::{ExportError, ensure_parent};

/// Lets spreadsheet tools pick UTF-8 for Vietnamese text
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write `words,counts` rows, BOM first, no index column. Overwrites `destination`.
pub fn export_table(table: &FrequencyTable, destination: &Path) -> Result<(), ExportError> {
    ensure_parent(destination)?;

    let mut file = BufWriter::new(File::create(destination)?);
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::Writer::from_writer(file);
    writer.write_record(["words", "counts"])?;
    for row in table {
        writer.write_record([row.word.as_str(), row.count.to_string().as_str()])?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} rows to {}", table.len(), destination.display());
    Ok(())
}
