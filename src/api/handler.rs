//! Lambda handler for the quiz submission endpoint.
//!
//! One route: `POST` grades the submission and reports to Telegram,
//! `OPTIONS` answers the CORS preflight, anything else is a 405.

use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{error, info};

use super::helpers;
use crate::core::config::AppConfig;
use crate::core::models::Submission;
use crate::errors::ReportError;
use crate::quiz::{bank, scorer};
use crate::report;

pub use self::function_handler as handler;

/// Lambda handler for the submission endpoint.
///
/// # Errors
///
/// Never returns `Err`: every failure mode maps to a JSON error response so
/// the caller always gets an HTTP reply.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env();
    Ok(handle_request(&config, &event.payload).await)
}

/// Routes one API Gateway proxy event to a response payload.
pub async fn handle_request(config: &AppConfig, payload: &Value) -> Value {
    let Some(method) = request_method(payload) else {
        error!("Request missing HTTP method");
        return helpers::err_response(400, "Missing request method");
    };

    if method.eq_ignore_ascii_case("OPTIONS") {
        return helpers::ok_empty();
    }

    if !method.eq_ignore_ascii_case("POST") {
        return helpers::err_response(405, "Method not allowed");
    }

    let body = match extract_body(payload) {
        Ok(b) => b,
        Err(response) => return response,
    };

    match process_submission(config, body).await {
        Ok(response) => response,
        Err(e) => {
            error!("Failed to process submission: {}", e);
            helpers::internal_error(&e.to_string())
        }
    }
}

async fn process_submission(config: &AppConfig, body: &str) -> Result<Value, ReportError> {
    let submission: Submission = serde_json::from_str(body)?;
    info!(
        "Received test data for: {}",
        submission.student_name.as_deref().unwrap_or("Unknown")
    );

    let results = scorer::grade(&submission, bank::questions());
    let telegram_sent = report::send_report(config, &results).await;

    Ok(helpers::json_response(
        200,
        &json!({
            "success": true,
            "message": "Test submitted successfully",
            "telegramSent": telegram_sent,
            "score": results.score,
            "correctAnswers": results.correct_count,
        }),
    ))
}

fn request_method(payload: &Value) -> Option<&str> {
    payload
        .get("httpMethod")
        .and_then(|v| v.as_str())
        .or_else(|| {
            payload
                .get("requestContext")
                .and_then(|ctx| ctx.get("http"))
                .and_then(|http| http.get("method"))
                .and_then(|v| v.as_str())
        })
}

fn extract_body(payload: &Value) -> Result<&str, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(400, "Missing body"));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, "Invalid body format"));
    };

    Ok(body_str)
}
