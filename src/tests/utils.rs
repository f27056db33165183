use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

pub const BOUNDARY: &str = "test-boundary-7d93b";

/// Wrap CSV text in a multipart/form-data body the way a browser form would.
pub fn multipart_csv_body(csv: &str) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"file\"; filename=\"attendance.csv\"\r\n",
    );
    body.extend_from_slice(b"Content-Type: text/csv\r\n\r\n");
    body.extend_from_slice(csv.as_bytes());
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// POST `csv` to `path` as a browser file upload would.
pub fn upload_request(path: &str, csv: &str) -> Request {
    http::Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::new(multipart_csv_body(csv)))
        .expect("request builds")
}

pub fn get_request(path: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .expect("request builds")
}

/// Drain a response body into a String for content assertions.
pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .expect("readable body");
    String::from_utf8_lossy(&bytes).into_owned()
}
