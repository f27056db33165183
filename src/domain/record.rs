// src/domain/record.rs

use chrono::NaiveDateTime;
use csv::StringRecord;

use crate::ingest::columns::ColumnMap;
use crate::ingest::reader::parse_timestamp;

/// One participant row, as parsed from the upload.
/// This acts as an anti-corruption layer between the raw sheet and the
/// classifier: fields that failed to parse are None, and the row still flows
/// through classification rather than aborting the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub name: String,
    pub email: Option<String>,
    pub join_time: Option<NaiveDateTime>,
    pub leave_time: Option<NaiveDateTime>,
    /// Raw disclaimer-response value ("OK", "Yes", or whatever the sheet says).
    pub responded: Option<String>,
    pub feedback: Option<String>,
    /// Derived once at construction; None when either timestamp is null.
    pub duration_minutes: Option<f64>,
}

impl AttendanceRecord {
    /// Builds a record from one CSV row using the resolved column positions.
    /// Never fails: absent or unparseable cells become None.
    pub fn from_row(row: &StringRecord, columns: &ColumnMap) -> Self {
        let join_time = field(row, Some(columns.join_time)).and_then(parse_timestamp);
        let leave_time = field(row, Some(columns.leave_time)).and_then(parse_timestamp);

        AttendanceRecord {
            name: field(row, columns.name).unwrap_or("").to_string(),
            email: field(row, columns.email).map(str::to_string),
            responded: field(row, columns.responded).map(str::to_string),
            feedback: field(row, columns.feedback).map(str::to_string),
            duration_minutes: compute_duration(join_time, leave_time),
            join_time,
            leave_time,
        }
    }
}

/// Minutes between join and leave. Negative when leave precedes join (clock
/// skew, hand-edited sheets); the rule table decides what that means, so it
/// is not clamped here.
pub fn compute_duration(
    join: Option<NaiveDateTime>,
    leave: Option<NaiveDateTime>,
) -> Option<f64> {
    let (join, leave) = (join?, leave?);
    Some((leave - join).num_milliseconds() as f64 / 60_000.0)
}

fn field<'a>(row: &'a StringRecord, idx: Option<usize>) -> Option<&'a str> {
    idx.and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn duration_is_exact_minutes() {
        let d = compute_duration(Some(ts(10, 0, 0)), Some(ts(12, 0, 0))).unwrap();
        assert!((d - 120.0).abs() < 1e-6);

        let d = compute_duration(Some(ts(10, 0, 0)), Some(ts(11, 30, 30))).unwrap();
        assert!((d - 90.5).abs() < 1e-6);
    }

    #[test]
    fn negative_duration_is_preserved() {
        let d = compute_duration(Some(ts(12, 0, 0)), Some(ts(10, 0, 0))).unwrap();
        assert!((d + 120.0).abs() < 1e-6);
    }

    #[test]
    fn null_timestamps_propagate() {
        assert_eq!(compute_duration(None, Some(ts(10, 0, 0))), None);
        assert_eq!(compute_duration(Some(ts(10, 0, 0)), None), None);
        assert_eq!(compute_duration(None, None), None);
    }

    #[test]
    fn from_row_fills_fields_and_derives_duration() {
        let columns = ColumnMap {
            name: Some(0),
            email: Some(1),
            join_time: 2,
            leave_time: 3,
            responded: Some(4),
            feedback: None,
        };
        let row = StringRecord::from(vec![
            "  Alice  ",
            "alice@example.com",
            "2024-01-01 10:00:00",
            "2024-01-01 11:00:00",
            "OK",
        ]);

        let record = AttendanceRecord::from_row(&row, &columns);
        assert_eq!(record.name, "Alice");
        assert_eq!(record.email.as_deref(), Some("alice@example.com"));
        assert_eq!(record.responded.as_deref(), Some("OK"));
        assert_eq!(record.feedback, None);
        assert_eq!(record.duration_minutes, Some(60.0));
    }

    #[test]
    fn empty_cells_become_none() {
        let columns = ColumnMap {
            name: Some(0),
            email: Some(1),
            join_time: 2,
            leave_time: 3,
            responded: Some(4),
            feedback: Some(5),
        };
        let row = StringRecord::from(vec!["", "  ", "junk", "2024-01-01 11:00:00", "", ""]);

        let record = AttendanceRecord::from_row(&row, &columns);
        assert_eq!(record.name, "");
        assert_eq!(record.email, None);
        assert_eq!(record.join_time, None);
        assert_eq!(record.leave_time, Some(ts(11, 0, 0)));
        assert_eq!(record.duration_minutes, None);
    }
}
