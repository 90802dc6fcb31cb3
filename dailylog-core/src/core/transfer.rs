//! Shortcut import/export as CSV.
//!
//! Rows are `[label, text, cursor, kind]` in that order with no header row,
//! matching what earlier releases produced. Malformed rows fail the batch
//! with the offending 1-based row index.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::core::error::{DailylogError, Result};
use crate::core::shortcut::{Shortcut, ShortcutKind};
use crate::core::store::{BulkAddReport, ShortcutStore};

/// Writes every stored shortcut to `writer` in tray order.
pub fn export_shortcuts<W: Write>(store: &ShortcutStore, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for shortcut in store.list()? {
        let cursor = shortcut.cursor.to_string();
        csv_writer.write_record([
            shortcut.label.as_str(),
            shortcut.text.as_str(),
            cursor.as_str(),
            shortcut.kind.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Exports to a file at `path`, creating or truncating it.
pub fn export_shortcuts_to_path<P: AsRef<Path>>(store: &ShortcutStore, path: P) -> Result<()> {
    export_shortcuts(store, File::create(path)?)
}

/// Decodes shortcuts from CSV rows read off `reader`.
///
/// Positions are assigned in row order; the store decides final positions
/// when the batch is applied.
///
/// # Errors
///
/// Returns [`DailylogError::InvalidRow`] naming the first malformed row:
/// wrong field count, non-integer cursor, or unknown kind tag.
pub fn import_shortcuts<R: Read>(reader: R) -> Result<Vec<Shortcut>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut shortcuts = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let row = index + 1;
        let record = record?;

        if record.len() != 4 {
            return Err(DailylogError::InvalidRow {
                row,
                reason: format!("expected 4 fields, got {}", record.len()),
            });
        }

        let label = record[0].trim();
        if label.is_empty() {
            return Err(DailylogError::InvalidRow {
                row,
                reason: "empty label".to_string(),
            });
        }

        let cursor: i64 = record[2].trim().parse().map_err(|_| DailylogError::InvalidRow {
            row,
            reason: format!("cursor '{}' is not an integer", &record[2]),
        })?;

        let kind = ShortcutKind::parse(record[3].trim()).ok_or_else(|| DailylogError::InvalidRow {
            row,
            reason: format!("unknown kind '{}'", &record[3]),
        })?;

        shortcuts.push(Shortcut {
            label: label.to_string(),
            text: record[1].to_string(),
            cursor,
            kind,
            position: index as i32,
        });
    }

    Ok(shortcuts)
}

/// Imports from a file at `path`.
pub fn import_shortcuts_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Shortcut>> {
    import_shortcuts(File::open(path)?)
}

/// Decodes `reader` and applies the batch to `store`.
pub fn import_shortcuts_into<R: Read>(
    store: &mut ShortcutStore,
    reader: R,
) -> Result<BulkAddReport> {
    let shortcuts = import_shortcuts(reader)?;
    store.bulk_add(&shortcuts)
}

/// Counts returned by a completed import.
pub type ImportReport = BulkAddReport;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn store_with_shortcuts() -> (ShortcutStore, NamedTempFile) {
        let temp = NamedTempFile::new().unwrap();
        let mut store = ShortcutStore::create(temp.path()).unwrap();
        store.add("brb", "be right back", -1, ShortcutKind::Text).unwrap();
        store.add("mtg", "meeting with ", 13, ShortcutKind::Text).unwrap();
        store.add("now", "%H:%M", -1, ShortcutKind::Timestamp).unwrap();
        (store, temp)
    }

    #[test]
    fn test_export_writes_rows_in_tray_order_without_header() {
        let (store, _temp) = store_with_shortcuts();
        let mut out = Vec::new();
        export_shortcuts(&store, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "brb,be right back,-1,text");
        assert_eq!(lines[1], "mtg,meeting with ,13,text");
        assert_eq!(lines[2], "now,%H:%M,-1,timestamp");
    }

    #[test]
    fn test_import_decodes_field_order() {
        let csv = "brb,be right back,-1,text\nnow,%H:%M,-1,timestamp\n";
        let shortcuts = import_shortcuts(csv.as_bytes()).unwrap();

        assert_eq!(shortcuts.len(), 2);
        assert_eq!(shortcuts[0].label, "brb");
        assert_eq!(shortcuts[0].cursor, -1);
        assert_eq!(shortcuts[1].kind, ShortcutKind::Timestamp);
    }

    #[test]
    fn test_import_reports_offending_row_index() {
        let csv = "ok,fine,-1,text\nbad,row,not-a-number,text\n";
        let err = import_shortcuts(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DailylogError::InvalidRow { row: 2, .. }));
    }

    #[test]
    fn test_import_rejects_short_rows_and_unknown_kinds() {
        let err = import_shortcuts("only,three,fields\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DailylogError::InvalidRow { row: 1, .. }));

        let err = import_shortcuts("a,b,0,emoji\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DailylogError::InvalidRow { row: 1, .. }));

        let err = import_shortcuts(",text,0,text\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DailylogError::InvalidRow { row: 1, .. }));
    }

    #[test]
    fn test_round_trip_through_store() {
        let (store, _temp) = store_with_shortcuts();
        let mut out = Vec::new();
        export_shortcuts(&store, &mut out).unwrap();

        let temp = NamedTempFile::new().unwrap();
        let mut fresh = ShortcutStore::create(temp.path()).unwrap();
        let report = import_shortcuts_into(&mut fresh, out.as_slice()).unwrap();

        assert_eq!(report.added, 3);
        assert_eq!(report.updated, 0);
        assert_eq!(fresh.list().unwrap(), store.list().unwrap());
    }

    #[test]
    fn test_import_with_quoted_commas() {
        let csv = "addr,\"12 Fox Lane, Springfield\",-1,text\n";
        let shortcuts = import_shortcuts(csv.as_bytes()).unwrap();
        assert_eq!(shortcuts[0].text, "12 Fox Lane, Springfield");
    }
}
