mod card;
mod quiz;
mod subject;

pub use card::{Card, CardDraft, CardError, MISSING_ANSWER, MISSING_PROMPT};
pub use quiz::{QuizQuestion, QuizRequest, QuizRequestError, MISSING_QUESTION};
pub use subject::{Subject, SubjectError, SubjectKey, SUBJECT_FILE_EXTENSION};
