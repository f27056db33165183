// src/tests/router_tests/home_tests.rs

use crate::domain::RuleTable;
use crate::router::handle;
use crate::tests::utils::{body_string, get_request};

#[test]
fn home_page_offers_the_upload_form() {
    let rules = RuleTable::default();

    let mut resp = handle(get_request("/"), &rules).expect("home response");
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("action=\"/report\""));
    assert!(body.contains("formaction=\"/export\""));
    assert!(body.contains("type=\"file\""));
}
