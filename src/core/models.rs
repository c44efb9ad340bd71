use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry in the fixed question bank.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub question: &'static str,
    pub options: [&'static str; 4],
    /// 0-based index into `options`.
    pub correct: usize,
}

/// Inbound quiz submission, as posted by the quiz frontend.
///
/// Every field is optional: a submission with no name or no answers map is
/// still graded, with missing answers counted as unanswered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Submission {
    pub student_name: Option<String>,
    /// Question index -> selected option. Values are kept as raw JSON so that
    /// malformed entries can be graded (as wrong) instead of rejecting the
    /// whole submission.
    pub answers: Option<BTreeMap<usize, Value>>,
    pub time_spent: Option<u64>,
    pub time_left: Option<u64>,
    pub leave_count: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnswerStatus {
    Correct,
    Wrong,
    Unanswered,
}

impl AnswerStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerStatus::Correct => "Correct",
            AnswerStatus::Wrong => "Wrong",
            AnswerStatus::Unanswered => "Unanswered",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionOutcome {
    /// 1-based question number.
    pub number: usize,
    pub question: String,
    /// Text of the chosen option, or `"Not answered"`.
    pub student_answer: String,
    pub correct_answer: String,
    pub status: AnswerStatus,
}

/// Computed grading record for one submission.
#[derive(Debug, Clone, Serialize)]
pub struct QuizResult {
    pub student_name: String,
    pub time_spent: String,
    pub time_left: String,
    /// Rounded percentage, 0-100.
    pub score: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub unanswered_count: u32,
    pub leave_count: u64,
    pub submission_date: String,
    pub total_questions: u32,
    pub detailed_results: Vec<QuestionOutcome>,
}
