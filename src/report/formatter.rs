//! Renders a [`QuizResult`] into the sequence of Telegram message texts:
//! header, batched per-question outcomes, and a trailing summary.

use crate::core::models::{AnswerStatus, QuestionOutcome, QuizResult};

/// Telegram rejects messages over 4096 characters; batches are cut at 4000
/// to leave headroom.
pub const MESSAGE_LIMIT: usize = 4000;

/// Score thresholds for the qualitative performance label, highest first.
const PERFORMANCE_LEVELS: &[(u32, &str)] = &[
    (90, "\u{1F3C6} Outstanding"),
    (80, "\u{1F3AF} Excellent"),
    (70, "\u{1F44D} Good"),
    (60, "\u{1F4C8} Average"),
    (0, "\u{1F4C9} Needs Improvement"),
];

#[must_use]
pub fn performance_label(score: u32) -> &'static str {
    PERFORMANCE_LEVELS
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map_or("\u{1F4C9} Needs Improvement", |(_, label)| label)
}

#[must_use]
pub fn format_header(result: &QuizResult) -> String {
    format!(
        "\u{1F393} ENGLISH TEST SUBMISSION\n\n\
         \u{1F464} Student: {}\n\
         \u{23F1}\u{FE0F} Time Spent: {}\n\
         \u{23F0} Time Left: {}\n\
         \u{1F4CA} Score: {}/{} ({}%)\n\
         \u{2705} Correct: {}\n\
         \u{274C} Wrong: {}\n\
         \u{23ED}\u{FE0F} Unanswered: {}\n\
         \u{1F6AA} Page Leaves: {}\n\
         \u{1F4C5} Submitted: {}\n\n\
         DETAILED RESULTS:\n\
         \u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\n",
        result.student_name,
        result.time_spent,
        result.time_left,
        result.correct_count,
        result.total_questions,
        result.score,
        result.correct_count,
        result.wrong_count,
        result.unanswered_count,
        result.leave_count,
        result.submission_date,
    )
}

#[must_use]
pub fn format_outcome_line(outcome: &QuestionOutcome) -> String {
    let marker = match outcome.status {
        AnswerStatus::Correct => "\u{2705}",
        AnswerStatus::Wrong => "\u{274C}",
        AnswerStatus::Unanswered => "\u{23ED}\u{FE0F}",
    };
    format!(
        "{} Question {}: {}\n   Student's Answer: {}\n   Correct Answer: {}\n   Status: {}\n\n",
        marker,
        outcome.number,
        outcome.question,
        outcome.student_answer,
        outcome.correct_answer,
        outcome.status.as_str(),
    )
}

#[must_use]
pub fn format_summary(result: &QuizResult) -> String {
    format!(
        "\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\n\
         SUMMARY\n\
         \u{1F3C6} Final Score: {}%\n\
         \u{1F4C8} Performance: {}",
        result.score,
        performance_label(result.score),
    )
}

/// Builds the full ordered message sequence for one result.
///
/// Outcome lines accumulate into a batch; a line that would push the batch
/// past [`MESSAGE_LIMIT`] closes the current batch and starts the next one.
/// Delivery order is header, batches, summary.
#[must_use]
pub fn build_messages(result: &QuizResult) -> Vec<String> {
    let mut messages = vec![format_header(result)];

    let mut batch = String::new();
    for outcome in &result.detailed_results {
        let line = format_outcome_line(outcome);
        if !batch.is_empty() && batch.len() + line.len() > MESSAGE_LIMIT {
            messages.push(std::mem::replace(&mut batch, line));
        } else {
            batch.push_str(&line);
        }
    }
    if !batch.is_empty() {
        messages.push(batch);
    }

    messages.push(format_summary(result));
    messages
}
