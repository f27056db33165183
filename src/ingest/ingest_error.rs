use std::error::Error;
use std::fmt;

/// File-level failures while turning an upload into attendance records.
/// Row-level problems never show up here; those degrade the row and the
/// batch keeps going.
#[derive(Debug)]
pub enum IngestError {
    /// Required columns absent after header normalization.
    MissingColumns(Vec<String>),
    /// The upload could not be decoded under any attempted text encoding.
    Encoding(String),
    /// The CSV itself was structurally unreadable.
    Csv(String),
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::MissingColumns(cols) => {
                write!(f, "Missing required column(s): {}", cols.join(", "))
            }
            IngestError::Encoding(msg) => write!(f, "Encoding error: {msg}"),
            IngestError::Csv(msg) => write!(f, "CSV parse error: {msg}"),
        }
    }
}

impl Error for IngestError {}
