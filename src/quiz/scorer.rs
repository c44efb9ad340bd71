//! Pure grading logic: a [`Submission`] plus the question bank in, one
//! [`QuizResult`] out. No side effects and no failure modes; malformed input
//! degrades to unanswered/wrong classifications instead of erroring.

use chrono::Utc;
use serde_json::Value;

use crate::core::models::{AnswerStatus, Question, QuestionOutcome, QuizResult, Submission};

const NOT_ANSWERED: &str = "Not answered";
const UNKNOWN_STUDENT: &str = "Unknown";

/// Grades a submission against the question bank.
///
/// Classification per question:
/// - no entry (or JSON `null`) in the answers map -> `Unanswered`;
/// - an entry equal to the question's correct index -> `Correct`;
/// - any other entry, including out-of-range or non-integer values ->
///   `Wrong`. An index that points at no option is still a committed answer,
///   so it counts against the student rather than as a skip.
#[must_use]
pub fn grade(submission: &Submission, bank: &[Question]) -> QuizResult {
    let mut correct_count: u32 = 0;
    let mut wrong_count: u32 = 0;
    let mut unanswered_count: u32 = 0;
    let mut detailed_results = Vec::with_capacity(bank.len());

    for (index, question) in bank.iter().enumerate() {
        let answer = submission
            .answers
            .as_ref()
            .and_then(|answers| answers.get(&index))
            .filter(|value| !value.is_null());

        let (status, student_answer) = match answer {
            None => (AnswerStatus::Unanswered, NOT_ANSWERED.to_string()),
            Some(value) => {
                let chosen = value.as_u64().map(|i| i as usize);
                if chosen == Some(question.correct) {
                    (
                        AnswerStatus::Correct,
                        question.options[question.correct].to_string(),
                    )
                } else {
                    (AnswerStatus::Wrong, describe_answer(question, value))
                }
            }
        };

        match status {
            AnswerStatus::Correct => correct_count += 1,
            AnswerStatus::Wrong => wrong_count += 1,
            AnswerStatus::Unanswered => unanswered_count += 1,
        }

        detailed_results.push(QuestionOutcome {
            number: index + 1,
            question: question.question.to_string(),
            student_answer,
            correct_answer: question.options[question.correct].to_string(),
            status,
        });
    }

    let total_questions = bank.len() as u32;

    QuizResult {
        student_name: submission
            .student_name
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_STUDENT.to_string()),
        time_spent: format_time(submission.time_spent.unwrap_or(0)),
        time_left: format_time(submission.time_left.unwrap_or(0)),
        score: percentage(correct_count, total_questions),
        correct_count,
        wrong_count,
        unanswered_count,
        leave_count: submission.leave_count.unwrap_or(0),
        submission_date: Utc::now().format("%m/%d/%Y, %I:%M:%S %p").to_string(),
        total_questions,
        detailed_results,
    }
}

/// Option text for a committed answer, falling back to the raw JSON token
/// when the value does not name an existing option.
fn describe_answer(question: &Question, value: &Value) -> String {
    value
        .as_u64()
        .and_then(|i| question.options.get(i as usize))
        .map_or_else(|| value.to_string(), |option| (*option).to_string())
}

/// Rounded percentage of `correct` out of `total`, half rounding away from
/// zero (so 12.5% -> 13).
#[must_use]
pub fn percentage(correct: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    ((f64::from(correct) / f64::from(total)) * 100.0).round() as u32
}

/// Formats a duration in seconds as `"{m}m {s}s"`; zero seconds is `"0m 0s"`.
#[must_use]
pub fn format_time(seconds: u64) -> String {
    format!("{}m {}s", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_truncates_minutes() {
        assert_eq!(format_time(0), "0m 0s");
        assert_eq!(format_time(59), "0m 59s");
        assert_eq!(format_time(125), "2m 5s");
        assert_eq!(format_time(600), "10m 0s");
    }

    #[test]
    fn percentage_rounds_half_away_from_zero() {
        assert_eq!(percentage(1, 8), 13); // 12.5%
        assert_eq!(percentage(1, 25), 4);
        assert_eq!(percentage(0, 25), 0);
        assert_eq!(percentage(25, 25), 100);
        assert_eq!(percentage(0, 0), 0);
    }
}
