use std::io::Read;

use astra::Request;
use log::info;

use crate::domain::{classify_batch, RuleTable};
use crate::errors::{ResultResp, ServerError};
use crate::ingest;
use crate::responses::html_response;
use crate::spreadsheets::export_report_xlsx;
use crate::templates;

pub fn handle(req: Request, rules: &RuleTable) -> ResultResp {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),

        ("POST", "/report") => {
            let csv_text = read_upload(req)?;
            let records = ingest::read_records(&csv_text)?;
            info!("classified {} rows from upload", records.len());

            let report = classify_batch(&records, rules);
            html_response(templates::pages::report_page(&report))
        }

        ("POST", "/export") => {
            let csv_text = read_upload(req)?;
            let records = ingest::read_records(&csv_text)?;
            info!("exporting {} rows as xlsx", records.len());

            let report = classify_batch(&records, rules);
            export_report_xlsx(&report)
        }

        _ => Err(ServerError::NotFound),
    }
}

/// Pull the uploaded file out of the request: the multipart `file` field when
/// the form posts multipart/form-data, otherwise the raw body (curl-friendly).
fn read_upload(req: Request) -> Result<String, ServerError> {
    let boundary = multipart_boundary(&req);

    let mut body = Vec::new();
    req.into_body()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read request body: {e}")))?;

    let file_bytes = match boundary {
        Some(boundary) => extract_file_field(&body, &boundary)
            .ok_or_else(|| ServerError::BadRequest("no file field in upload".to_string()))?,
        None => body,
    };

    if file_bytes.is_empty() {
        return Err(ServerError::BadRequest("uploaded file is empty".to_string()));
    }

    Ok(ingest::decode_upload(&file_bytes)?)
}

fn multipart_boundary(req: &Request) -> Option<String> {
    let content_type = req.headers().get("Content-Type")?.to_str().ok()?;
    let mime: mime::Mime = content_type.parse().ok()?;

    if mime.type_() == mime::MULTIPART && mime.subtype() == mime::FORM_DATA {
        mime.get_param(mime::BOUNDARY)
            .map(|b| b.as_str().to_string())
    } else {
        None
    }
}

/// Minimal multipart/form-data scan: find the part whose headers carry
/// `name="file"` and return its payload bytes.
fn extract_file_field(body: &[u8], boundary: &str) -> Option<Vec<u8>> {
    let delimiter = format!("--{boundary}").into_bytes();

    let mut pos = 0;
    while let Some(start) = find(body, &delimiter, pos) {
        let part_start = start + delimiter.len();
        let part_end = find(body, &delimiter, part_start).unwrap_or(body.len());
        let part = &body[part_start..part_end];
        pos = part_end;

        // Part layout: CRLF, headers, CRLF CRLF, payload, CRLF.
        let part = part.strip_prefix(b"\r\n").unwrap_or(part);
        let Some(header_end) = find(part, b"\r\n\r\n", 0) else {
            continue;
        };

        let headers = String::from_utf8_lossy(&part[..header_end]).to_ascii_lowercase();
        if !headers.contains("name=\"file\"") {
            continue;
        }

        let payload = &part[header_end + 4..];
        let payload = payload.strip_suffix(b"\r\n").unwrap_or(payload);
        return Some(payload.to_vec());
    }

    None
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }

    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|i| i + from)
}
