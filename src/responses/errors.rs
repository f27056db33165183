use crate::errors::ServerError;
use crate::templates::error_page;
use astra::Response;

/// Convert a ServerError into a proper HTML response page.
/// Classification failures (missing columns, undecodable files) are the
/// upload's fault, not ours, so they answer 422 with the requirement that
/// failed spelled out.
pub fn html_error_response(err: ServerError) -> Response {
    match &err {
        ServerError::NotFound => error_page(404, "Not Found"),
        ServerError::BadRequest(msg) => error_page(400, msg),
        ServerError::Ingest(e) => error_page(422, &e.to_string()),
        ServerError::XlsxError(msg) => error_page(500, &format!("Spreadsheet Error: {msg}")),
        ServerError::InternalError => error_page(500, "Internal Server Error"),
    }
}
