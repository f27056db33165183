// src/tests/router_tests/report_tests.rs

use astra::Body;
use http::Method;

use crate::domain::RuleTable;
use crate::errors::ServerError;
use crate::ingest::IngestError;
use crate::router::handle;
use crate::tests::utils::{body_string, get_request, upload_request};

const SAMPLE_CSV: &str = "\
Name (original name),Email,Join time,Leave time,Recording disclaimer response,Feedback\n\
Alice,alice@example.com,2024-01-01 10:00:00,2024-01-01 12:00:00,OK,Great session\n\
Bob,bob@example.com,2024-01-01 10:00:00,2024-01-01 11:30:00,Yes,\n\
Carol,carol@example.com,not a time,2024-01-01 11:00:00,OK,\n";

#[test]
fn report_renders_category_counts_and_rows() {
    let rules = RuleTable::default();
    let req = upload_request("/report", SAMPLE_CSV);

    let mut resp = handle(req, &rules).expect("report response");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);

    // Alice attended 120 min with a disclaimer response.
    assert!(body.contains("Qualified"));
    assert!(body.contains("Alice"));
    assert!(body.contains("alice@example.com"));

    // Bob's 90 minutes land in the middle bucket.
    assert!(body.contains("Potentially Present"));

    // Carol's join time is unparseable, so she falls to the default bucket.
    assert!(body.contains("Absent"));
    assert!(body.contains("Carol"));
}

#[test]
fn raw_csv_body_without_multipart_is_accepted() {
    let rules = RuleTable::default();
    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/report")
        .header("Content-Type", "text/csv")
        .body(Body::new(SAMPLE_CSV))
        .expect("request builds");

    let resp = handle(req, &rules).expect("report response");
    assert_eq!(resp.status(), 200);
}

#[test]
fn missing_required_column_is_a_schema_error() {
    let rules = RuleTable::default();
    let csv = "Name,Join time\nAlice,2024-01-01 10:00:00\n";

    let err = handle(upload_request("/report", csv), &rules).expect_err("schema error");

    match err {
        ServerError::Ingest(IngestError::MissingColumns(cols)) => {
            assert_eq!(cols, vec!["leave_time"]);
        }
        other => panic!("expected a missing-columns error, got {other:?}"),
    }
}

#[test]
fn empty_upload_is_a_bad_request() {
    let rules = RuleTable::default();

    let err = handle(upload_request("/report", ""), &rules).expect_err("bad request");
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn multipart_without_a_file_field_is_a_bad_request() {
    let rules = RuleTable::default();
    let boundary = "xyz";
    let body = format!(
        "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nhello\r\n--{boundary}--\r\n"
    );

    let req = http::Request::builder()
        .method(Method::POST)
        .uri("/report")
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::new(body))
        .expect("request builds");

    let err = handle(req, &rules).expect_err("bad request");
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn unknown_routes_are_not_found() {
    let rules = RuleTable::default();

    let err = handle(get_request("/nope"), &rules).expect_err("not found");
    assert!(matches!(err, ServerError::NotFound));
}
