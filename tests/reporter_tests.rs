use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use quizgram::core::config::AppConfig;
use quizgram::core::models::Submission;
use quizgram::errors::ReportError;
use quizgram::quiz::{bank, scorer};
use quizgram::report::{MessageTransport, deliver_report, send_report};

/// Tests for best-effort delivery semantics using in-memory transports.

#[derive(Default)]
struct RecordingTransport {
    messages: Mutex<Vec<String>>,
}

#[async_trait]
impl MessageTransport for RecordingTransport {
    async fn send_message(&self, text: &str) -> Result<(), ReportError> {
        self.messages.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Fails every send after the first `succeed_first` messages.
struct FlakyTransport {
    succeed_first: usize,
    sent: AtomicUsize,
}

#[async_trait]
impl MessageTransport for FlakyTransport {
    async fn send_message(&self, _text: &str) -> Result<(), ReportError> {
        let already_sent = self.sent.fetch_add(1, Ordering::SeqCst);
        if already_sent < self.succeed_first {
            Ok(())
        } else {
            Err(ReportError::ApiError("chat not found".to_string()))
        }
    }
}

#[tokio::test]
async fn full_report_is_delivered_in_order() {
    let results = scorer::grade(&Submission::default(), bank::questions());
    let transport = RecordingTransport::default();

    assert!(deliver_report(&transport, &results).await);

    let messages = transport.messages.lock().unwrap();
    assert!(messages.len() >= 3);
    assert!(messages.first().unwrap().contains("ENGLISH TEST SUBMISSION"));
    assert!(messages.last().unwrap().contains("SUMMARY"));
    assert!(messages.iter().all(|m| m.len() <= 4000));
}

#[tokio::test]
async fn transport_failure_reports_non_delivery() {
    let results = scorer::grade(&Submission::default(), bank::questions());
    let transport = FlakyTransport {
        succeed_first: 0,
        sent: AtomicUsize::new(0),
    };

    assert!(!deliver_report(&transport, &results).await);
}

#[tokio::test]
async fn mid_sequence_failure_keeps_already_sent_messages() {
    let results = scorer::grade(&Submission::default(), bank::questions());
    let transport = FlakyTransport {
        succeed_first: 1,
        sent: AtomicUsize::new(0),
    };

    // Header goes through, the first batch fails, nothing is rolled back.
    assert!(!deliver_report(&transport, &results).await);
    assert!(transport.sent.load(Ordering::SeqCst) >= 2);
}

#[tokio::test]
async fn missing_credentials_skip_delivery_without_error() {
    let results = scorer::grade(&Submission::default(), bank::questions());
    let config = AppConfig::default();

    assert!(!send_report(&config, &results).await);
}
