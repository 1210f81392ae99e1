#![forbid(unsafe_code)]

pub mod json;
pub mod repository;

pub use json::JsonSubjectRepository;
pub use repository::{InMemoryRepository, Storage, StorageError, SubjectRepository};
