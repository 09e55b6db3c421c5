#![allow(dead_code)]

use gateway_cors::{AdmissionResult, Rejection};

pub fn assert_allowed(result: AdmissionResult) -> AdmissionResult {
    assert!(
        result.allow,
        "expected request to be admitted, got {:?}",
        result.rejection
    );
    assert_eq!(result.rejection, None);
    result
}

pub fn assert_rejected(result: AdmissionResult) -> (Rejection, AdmissionResult) {
    assert!(
        !result.allow,
        "expected rejection, got {:?}",
        result.headers
    );
    let rejection = result
        .rejection
        .clone()
        .expect("rejected results carry a rejection reason");
    (rejection, result)
}

pub fn assert_header_eq(result: &AdmissionResult, name: &str, expected: &str) {
    assert_eq!(
        result.header(name),
        Some(expected),
        "header {name} mismatch in {:?}",
        result.headers
    );
}

pub fn assert_header_absent(result: &AdmissionResult, name: &str) {
    assert!(
        result.header(name).is_none(),
        "header {name} should be absent in {:?}",
        result.headers
    );
}

pub fn assert_no_headers(result: &AdmissionResult) {
    assert!(
        result.headers.is_empty(),
        "expected no CORS headers, got {:?}",
        result.headers
    );
}
