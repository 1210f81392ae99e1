use serde::{Deserialize, Deserializer};
use serde_json::Value;
use study_core::model::{MISSING_ANSWER, MISSING_QUESTION, QuizQuestion};

use crate::error::QuizError;

/// Result of a well-formed generator reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizOutcome {
    /// At least one question is available.
    Ready(Vec<QuizQuestion>),
    /// The reply was a valid but empty array.
    NoQuestions,
}

#[derive(Debug, Deserialize)]
struct QuestionRecord {
    #[serde(
        alias = "pitanje",
        default = "missing_question",
        deserialize_with = "question_text"
    )]
    question: String,
    #[serde(
        alias = "odgovor",
        default = "missing_answer",
        deserialize_with = "answer_text"
    )]
    answer: String,
}

fn missing_question() -> String {
    MISSING_QUESTION.to_owned()
}

fn missing_answer() -> String {
    MISSING_ANSWER.to_owned()
}

fn question_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?, MISSING_QUESTION))
}

fn answer_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(value_text(Value::deserialize(deserializer)?, MISSING_ANSWER))
}

// Models often answer years and counts as bare numbers.
fn value_text(value: Value, placeholder: &str) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => placeholder.to_owned(),
        other => other.to_string(),
    }
}

/// Instructions sent along with the extracted text.
#[must_use]
pub fn build_prompt(text: &str, question_count: u32) -> String {
    format!(
        r#"You are an expert study assistant. Write high-quality questions and answers based on the text below.

1. Number of questions: write exactly {question_count} questions.
2. Focus: ask about the most important concepts, dates, formulas, definitions, or key facts. Skip irrelevant details.
3. Answers: each answer must be precise, short, and direct, not a copied passage.
4. Output format: reply with a strict JSON array of objects and nothing else. Do not add any other text, explanation, or markdown fences (such as ```json) before or after the JSON.

Example of the expected format:
[
    {{
        "question": "What is the primary function of mitochondria?",
        "answer": "Producing energy (ATP) through cellular respiration."
    }},
    {{
        "question": "When was the Dayton Agreement signed?",
        "answer": "14 December 1995."
    }}
]

TEXT TO ANALYSE:
---
{text}
---
"#
    )
}

/// Turn a generator reply into questions, keeping at most `question_count`.
///
/// Markdown code fences are tolerated. A reply that neither opens nor closes
/// like an array, or that is not a JSON array of objects, is rejected.
///
/// # Errors
///
/// Returns `QuizError::MalformedOutput` when the reply cannot be parsed.
pub fn parse_questions(raw: &str, question_count: u32) -> Result<QuizOutcome, QuizError> {
    let cleaned = raw.trim().replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    if !cleaned.starts_with('[') && !cleaned.ends_with(']') {
        tracing::warn!(preview = %preview(raw), "quiz reply is not bracketed as an array");
        return Err(QuizError::MalformedOutput(
            "reply is not bracketed as an array".into(),
        ));
    }

    let records: Vec<QuestionRecord> = serde_json::from_str(cleaned).map_err(|e| {
        tracing::warn!(preview = %preview(raw), "quiz reply is not valid JSON");
        QuizError::MalformedOutput(e.to_string())
    })?;

    if records.is_empty() {
        return Ok(QuizOutcome::NoQuestions);
    }

    let limit = usize::try_from(question_count).unwrap_or(usize::MAX);
    let questions = records
        .into_iter()
        .take(limit)
        .map(|record| QuizQuestion::new(record.question, record.answer))
        .collect();
    Ok(QuizOutcome::Ready(questions))
}

fn preview(raw: &str) -> String {
    raw.chars().take(200).collect()
}
