//! Serialization of generated combination records.

use std::io::Write;

use crate::core::types::CombinationRecord;

/// Write one `ID<delim>size<delim>combination` line per record.
///
/// # Errors
///
/// Returns any I/O error from the writer.
pub fn write_delimited<W: Write>(
    writer: &mut W,
    records: &[CombinationRecord],
    delimiter: char,
) -> std::io::Result<()> {
    for record in records {
        writeln!(
            writer,
            "{}{delimiter}{}{delimiter}{}",
            record.id, record.size, record.combination
        )?;
    }
    writer.flush()
}

/// Write records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(writer: &mut W, records: &[CombinationRecord]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, records)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
