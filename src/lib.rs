//! Quizgram - a serverless grader for a fixed multiple-choice English quiz
//! that reports each submission to a Telegram chat.
//!
//! A single Lambda receives the submission over HTTP, grades it against the
//! baked-in question bank, and forwards a human-readable report to Telegram.
//! Grading is pure and infallible; delivery is best-effort and never fails
//! the request.
//!
//! ```
//! use quizgram::core::models::Submission;
//! use quizgram::quiz::{bank, scorer};
//! use quizgram::report::formatter;
//!
//! let results = scorer::grade(&Submission::default(), bank::questions());
//! assert_eq!(results.unanswered_count, 25);
//!
//! let messages = formatter::build_messages(&results);
//! assert!(messages.len() >= 2);
//! ```

pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod quiz;
pub mod report;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call once at binary startup.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
