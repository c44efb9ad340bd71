//! Response builders for the API handler.
//!
//! Every response carries the permissive CORS header set the quiz frontend
//! relies on, in the `statusCode`/`headers`/`body` shape API Gateway expects.

use serde_json::{Value, json};

fn cors_headers() -> Value {
    json!({
        "Access-Control-Allow-Credentials": true,
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "GET,OPTIONS,PATCH,DELETE,POST,PUT",
        "Access-Control-Allow-Headers": "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version",
        "Content-Type": "application/json",
    })
}

/// Returns a 200 OK response with no body, for CORS preflight.
#[must_use]
pub fn ok_empty() -> Value {
    json!({ "statusCode": 200, "headers": cors_headers(), "body": "" })
}

/// Returns a JSON response with the given status code and body.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": body.to_string(),
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(status_code, &json!({ "error": message }))
}

/// Returns a 500 response for an unexpected failure while processing an
/// otherwise well-formed request.
#[must_use]
pub fn internal_error(message: &str) -> Value {
    json_response(500, &json!({ "success": false, "error": message }))
}
