use chrono::{DateTime, NaiveDateTime};
use csv::ReaderBuilder;
use log::debug;

use crate::domain::record::AttendanceRecord;
use crate::ingest::columns::resolve_columns;
use crate::ingest::IngestError;

/// Date-time shapes seen in real session exports, tried in order.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
];

/// Parse one timestamp cell. Unparseable input is a normal outcome, not an
/// error; the row simply degrades to a null timestamp.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(ts);
        }
    }

    // Some exports write ISO 8601 with a zone offset.
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.naive_utc())
}

/// Turn decoded CSV text into attendance records.
///
/// The header row must resolve to the required canonical columns; after that
/// every data row produces a record, however mangled its fields are. Only a
/// structurally unreadable CSV aborts the batch.
pub fn read_records(csv_text: &str) -> Result<Vec<AttendanceRecord>, IngestError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(csv_text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| IngestError::Csv(format!("could not read header row: {e}")))?
        .clone();
    let columns = resolve_columns(&headers)?;

    let mut records = Vec::new();
    let mut degraded = 0usize;

    for (idx, row) in reader.records().enumerate() {
        // +2: one for the header row, one for 1-based line numbers.
        let row = row.map_err(|e| IngestError::Csv(format!("row {}: {e}", idx + 2)))?;

        let record = AttendanceRecord::from_row(&row, &columns);
        if record.duration_minutes.is_none() {
            degraded += 1;
        }
        records.push(record);
    }

    if degraded > 0 {
        debug!(
            "{degraded} of {} rows had missing or unparseable timestamps",
            records.len()
        );
    }

    Ok(records)
}
