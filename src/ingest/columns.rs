use csv::StringRecord;

use crate::ingest::IngestError;

/// Accepted source spellings for each canonical field. The meeting platforms
/// disagree on header names; new spellings go in this table, not in code.
const COLUMN_ALIASES: &[(&str, &[&str])] = &[
    ("name", &["Name (original name)", "Name", "First name"]),
    ("email", &["Email"]),
    ("join_time", &["Join time", "Join_Time"]),
    ("leave_time", &["Leave time", "Leave_Time"]),
    ("responded", &["Recording disclaimer response", "Responded"]),
    ("feedback", &["Feedback", "Response 2"]),
];

/// Maps a raw header to its canonical field name, if it is one we know.
/// Tolerates surrounding whitespace and case differences.
pub fn canonical_name(header: &str) -> Option<&'static str> {
    let trimmed = header.trim();
    for (canonical, spellings) in COLUMN_ALIASES {
        if spellings.iter().any(|s| s.eq_ignore_ascii_case(trimmed)) {
            return Some(canonical);
        }
    }
    None
}

/// Canonical name for known headers; unknown headers pass through unchanged
/// (minus surrounding whitespace).
pub fn normalize_header(header: &str) -> &str {
    canonical_name(header).unwrap_or_else(|| header.trim())
}

/// Positions of the canonical fields within one upload's header row.
/// Join and leave time are the only hard requirements.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub name: Option<usize>,
    pub email: Option<usize>,
    pub join_time: usize,
    pub leave_time: usize,
    pub responded: Option<usize>,
    pub feedback: Option<usize>,
}

/// Resolve a header row against the alias table. When the same canonical
/// field appears twice the first occurrence wins.
pub fn resolve_columns(headers: &StringRecord) -> Result<ColumnMap, IngestError> {
    let mut name = None;
    let mut email = None;
    let mut join_time = None;
    let mut leave_time = None;
    let mut responded = None;
    let mut feedback = None;

    for (idx, header) in headers.iter().enumerate() {
        match canonical_name(header) {
            Some("name") => name = name.or(Some(idx)),
            Some("email") => email = email.or(Some(idx)),
            Some("join_time") => join_time = join_time.or(Some(idx)),
            Some("leave_time") => leave_time = leave_time.or(Some(idx)),
            Some("responded") => responded = responded.or(Some(idx)),
            Some("feedback") => feedback = feedback.or(Some(idx)),
            _ => {}
        }
    }

    let mut missing = Vec::new();
    if join_time.is_none() {
        missing.push("join_time".to_string());
    }
    if leave_time.is_none() {
        missing.push("leave_time".to_string());
    }

    let (Some(join_time), Some(leave_time)) = (join_time, leave_time) else {
        return Err(IngestError::MissingColumns(missing));
    };

    Ok(ColumnMap {
        name,
        email,
        join_time,
        leave_time,
        responded,
        feedback,
    })
}
