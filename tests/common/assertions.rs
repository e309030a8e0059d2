//! Custom assertions

use rust_decimal::Decimal;
use serde_json::Value;

/// Assert a decimal equals `cents` hundredths
pub fn assert_money(actual: Decimal, cents: i64) {
    let expected = Decimal::new(cents, 2);
    assert_eq!(
        actual, expected,
        "expected {} but got {}",
        expected, actual
    );
}

/// Assert a response body is a successful API envelope and return its data
pub fn assert_success(body: &Value) -> &Value {
    assert_eq!(body["success"], true, "unexpected body: {}", body);
    &body["data"]
}

/// Assert a response body is an error with `code`
pub fn assert_error_code(body: &Value, code: &str) {
    assert_eq!(body["error"]["code"], code, "unexpected body: {}", body);
    assert!(
        body["error"]["message"].as_str().is_some_and(|m| !m.is_empty()),
        "error message missing: {}",
        body
    );
}
