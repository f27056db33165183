use astra::Response;
use std::fmt;

use crate::ingest::IngestError;

/// Errors originating from either the server layer (routing, bad uploads)
/// or the classification pipeline underneath it.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Ingest(IngestError),
    XlsxError(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Ingest(err) => write!(f, "{err}"),
            ServerError::XlsxError(msg) => write!(f, "Spreadsheet Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<IngestError> for ServerError {
    fn from(err: IngestError) -> Self {
        ServerError::Ingest(err)
    }
}
