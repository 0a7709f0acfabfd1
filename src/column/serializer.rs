use crate::column::string_column::StringColumn;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::StringId;

/// Serialized layout: one sortedness byte followed by the raw little-endian
/// u32 identifier array, verbatim. The payload is not self-describing; the
/// enclosing container records the row count and supplies it on restore.
/// The string pool travels separately.
pub fn serialize(column: &StringColumn) -> Vec<u8> {
    let values = column.values();
    let mut out = Vec::with_capacity(1 + values.len() * 4);
    out.push(column.is_sorted() as u8);
    for id in values {
        out.extend_from_slice(&id.value().to_le_bytes());
    }
    out
}

/// Rebuild a column from `serialize` output. `row_count` must match the
/// enclosing column's row count.
pub fn deserialize(data: &[u8], row_count: usize) -> Result<StringColumn> {
    let expected = 1 + row_count * 4;
    if data.len() != expected {
        return Err(Error::new(
            ErrorKind::Parse,
            format!(
                "serialized column length mismatch: expected {} bytes for {} rows, got {}",
                expected,
                row_count,
                data.len()
            ),
        ));
    }
    let is_sorted = data[0] != 0;
    let mut values = Vec::with_capacity(row_count);
    for chunk in data[1..].chunks_exact(4) {
        let raw = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        values.push(StringId::new(raw));
    }
    Ok(StringColumn::new(values, is_sorted))
}
