//! Quiz generation from a document excerpt.
//!
//! Text is pulled from a page range of a PDF, sent to a chat-completions
//! endpoint with instructions to answer with a bare JSON array, and the reply is
//! parsed into question/answer pairs that are then stepped through in order.

mod backend;
mod document;
mod parse;
mod run;
mod service;

pub use backend::{ChatCompletionsBackend, QuizBackend};
pub use document::{DocumentReader, PdfDocumentReader};
pub use parse::{QuizOutcome, build_prompt, parse_questions};
pub use run::{QuizProgress, QuizRun};
pub use service::QuizService;
