// src/tests/router_tests/export_tests.rs

use crate::domain::RuleTable;
use crate::router::handle;
use crate::tests::utils::upload_request;

const SAMPLE_CSV: &str = "\
Name,Email,Join time,Leave time,Recording disclaimer response\n\
Alice,alice@example.com,2024-01-01 10:00:00,2024-01-01 12:00:00,OK\n";

#[test]
fn export_answers_with_a_workbook_attachment() {
    let rules = RuleTable::default();
    let req = upload_request("/export", SAMPLE_CSV);

    let resp = handle(req, &rules).expect("xlsx response");
    assert_eq!(resp.status(), 200);

    let content_type = resp
        .headers()
        .get("Content-Type")
        .expect("content type set")
        .to_str()
        .unwrap();
    assert!(content_type.contains("spreadsheetml"));

    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .expect("disposition set")
        .to_str()
        .unwrap();
    assert!(disposition.contains("attendance_report.xlsx"));
}

#[test]
fn export_validates_columns_like_the_report_does() {
    let rules = RuleTable::default();
    let csv = "Name,Leave time\nAlice,2024-01-01 12:00:00\n";

    let err = handle(upload_request("/export", csv), &rules).expect_err("schema error");
    assert!(err.to_string().contains("join_time"));
}
