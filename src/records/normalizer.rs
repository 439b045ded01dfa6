use crate::core::inventory::{InventoryError, InventoryResult};
use crate::records::domain::model::BookRecord;

pub(crate) const FIELD_COUNT: usize = 7;

// Parses the raw tab-separated snapshot into an ordered record sequence.
// The first line is a header naming the seven columns (sequence number,
// ISBN, title, author, publisher, price, stock) and is never ingested as a
// record. Rows keep their source order; a row whose trimmed id, ISBN, or
// title is empty is dropped. A payload without a seven-column header is
// malformed and no partial catalog is published.
pub(crate) fn parse_snapshot(raw: &str) -> InventoryResult<Vec<BookRecord>> {
    let mut lines = raw.lines().filter(|line| !line.trim().is_empty());

    let header = lines.next().ok_or_else(|| {
        InventoryError::parse("empty inventory payload")
    })?;
    let header_fields = header.split('\t').count();
    if header_fields < FIELD_COUNT {
        return Err(InventoryError::parse(
            format!("malformed header: expected {} columns, found {}",
                    FIELD_COUNT, header_fields).as_str()));
    }

    let mut records = Vec::new();
    for line in lines {
        if let Some(record) = parse_row(line) {
            records.push(record);
        }
    }
    Ok(records)
}

// Short rows are padded with empty fields before the drop rule applies;
// extra columns are ignored.
fn parse_row(line: &str) -> Option<BookRecord> {
    let mut fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    fields.resize(FIELD_COUNT, "");

    let id = fields[0];
    let isbn = fields[1];
    let title = fields[2];
    if id.is_empty() || isbn.is_empty() || title.is_empty() {
        return None;
    }
    Some(BookRecord::new(id, isbn, title, fields[3], fields[4], fields[5], fields[6]))
}
