//! The fixed question bank for the English question-words quiz.
//!
//! The bank is baked into the binary; the grader has no notion of multiple
//! quiz definitions.

use crate::core::models::Question;

pub const TOTAL_QUESTIONS: usize = 25;

static QUESTIONS: [Question; TOTAL_QUESTIONS] = [
    Question {
        question: "__________ is your name?",
        options: ["Where", "What", "When", "Why"],
        correct: 1,
    },
    Question {
        question: "__________ is the library? It's next to the school.",
        options: ["When", "Who", "Where", "Why"],
        correct: 2,
    },
    Question {
        question: "__________ is your teacher? Mr. Johnson is my teacher.",
        options: ["What", "Who", "Whose", "Which"],
        correct: 1,
    },
    Question {
        question: "__________ is your birthday? It's in June.",
        options: ["Where", "When", "What", "Why"],
        correct: 1,
    },
    Question {
        question: "__________ are you happy? Because I got a new bike!",
        options: ["Why", "Where", "When", "What"],
        correct: 0,
    },
    Question {
        question: "__________ pencil is this? Is it Anna's?",
        options: ["Who", "When", "Whose", "Which"],
        correct: 2,
    },
    Question {
        question: "__________ color do you like better, red or blue?",
        options: ["What", "When", "Which", "Whose"],
        correct: 2,
    },
    Question {
        question: "__________ do you do after school? I play soccer.",
        options: ["What", "When", "Where", "Why"],
        correct: 0,
    },
    Question {
        question: "__________ do you eat lunch? At 12:30.",
        options: ["Where", "What", "When", "Who"],
        correct: 2,
    },
    Question {
        question: "__________ is that woman? She's my aunt.",
        options: ["Which", "Whose", "Who", "Why"],
        correct: 2,
    },
    Question {
        question: "__________ is your favorite movie?",
        options: ["What", "Who", "Whose", "Where"],
        correct: 0,
    },
    Question {
        question: "__________ are my keys? They are on the table.",
        options: ["When", "Where", "What", "Why"],
        correct: 1,
    },
    Question {
        question: "__________ book is this? It's mine.",
        options: ["Who", "Whose", "Which", "Why"],
        correct: 1,
    },
    Question {
        question: "__________ one is your brother? The boy with the red shirt.",
        options: ["What", "Who", "Whose", "Which"],
        correct: 3,
    },
    Question {
        question: "__________ are you going to the park? Because I want to play.",
        options: ["Why", "Where", "When", "What"],
        correct: 0,
    },
    Question {
        question: "__________ do you live? I live in London.",
        options: ["Where", "When", "What", "Why"],
        correct: 0,
    },
    Question {
        question: "__________ is the problem? I can't find my phone.",
        options: ["When", "What", "Who", "Whose"],
        correct: 1,
    },
    Question {
        question: "__________ is your test? On Monday.",
        options: ["Where", "When", "What", "Why"],
        correct: 1,
    },
    Question {
        question: "__________ is that man's job? He is a chef.",
        options: ["What", "Who", "Whose", "Which"],
        correct: 0,
    },
    Question {
        question: "__________ bag is heavier, yours or mine?",
        options: ["Who", "Which", "Whose", "Why"],
        correct: 1,
    },
    Question {
        question: "__________ are you from? I'm from Brazil.",
        options: ["When", "Where", "What", "Who"],
        correct: 1,
    },
    Question {
        question: "__________ is crying? The baby is crying.",
        options: ["What", "Why", "Who", "Whose"],
        correct: 2,
    },
    Question {
        question: "__________ do you usually do on weekends? I visit my family.",
        options: ["What", "When", "Where", "Why"],
        correct: 0,
    },
    Question {
        question: "__________ is your address?",
        options: ["What", "Where", "When", "Why"],
        correct: 0,
    },
    Question {
        question: "__________ is your favorite singer? Taylor Swift.",
        options: ["Which", "Who", "Whose", "What"],
        correct: 1,
    },
];

#[must_use]
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}
