//! CSV batch parsing
//!
//! Turns uploaded CSV text into validated entries. Line 0 is always treated
//! as a header and skipped without inspecting it. One malformed line never
//! aborts the batch; it bumps the rejected counter and parsing continues.

use tracing::debug;

use crate::validate::{validate_entry, EntryDraft, PriceField};
use types::market::NormalizedEntry;

/// Result of parsing one CSV upload.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CsvBatch {
    /// Accepted, normalized entries in file order.
    pub entries: Vec<NormalizedEntry>,
    /// Number of data lines skipped as malformed or invalid.
    pub rejected: usize,
}

/// Parse CSV text into validated entries plus a rejected-line count.
///
/// Expected shape: a header line, then `name,category,price,region` per
/// line. Handles both `\n` and `\r\n` line breaks, trims every line and
/// field, drops blank lines, and ignores any fields past the fourth.
pub fn parse_csv(text: &str) -> CsvBatch {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut batch = CsvBatch::default();

    // lines[0] is the header, whatever it says
    for (lineno, line) in lines.iter().enumerate().skip(1) {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < 4 {
            debug!(lineno, "skipping CSV line with fewer than 4 fields");
            batch.rejected += 1;
            continue;
        }

        let draft = EntryDraft {
            name: Some(fields[0].to_string()),
            category: Some(fields[1].to_string()),
            price: Some(PriceField::Text(fields[2].to_string())),
            region: Some(fields[3].to_string()),
        };

        match validate_entry(&draft) {
            Ok(entry) => batch.entries.push(entry),
            Err(err) => {
                debug!(lineno, %err, "skipping invalid CSV line");
                batch.rejected += 1;
            }
        }
    }

    batch
}
