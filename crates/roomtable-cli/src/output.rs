//! Table persistence: JSON storage and CSV rendering.

use crate::error::Result;
use roomtable_domain::RoomTable;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the table as pretty-printed JSON (`{"rooms": [...]}`).
pub fn write_json(table: &RoomTable, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, table)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read a previously stored table.
pub fn read_json(path: &Path) -> Result<RoomTable> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write the table as CSV: field names as headers, one row per record.
///
/// Columns follow the record's field declaration order, the same order the
/// JSON rendering uses. An empty table produces an empty file.
pub fn write_csv(table: &RoomTable, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for room in &table.rooms {
        writer.serialize(room)?;
    }
    writer.flush()?;
    Ok(())
}
