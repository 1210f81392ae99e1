#![forbid(unsafe_code)]

pub mod app_services;
pub mod card_service;
pub mod config;
pub mod error;
pub mod quiz;
pub mod sessions;
pub mod subject_service;

pub use study_core::Clock;
pub use sessions as session;

pub use app_services::AppServices;
pub use card_service::{CardService, filter_cards};
pub use config::{AppConfig, QuizConfig};
pub use error::{AppServicesError, CardServiceError, QuizError, SessionError, SubjectServiceError};
pub use quiz::{QuizOutcome, QuizRun, QuizService};
pub use sessions::{SessionLoopService, SessionProgress, SessionService};
pub use subject_service::SubjectService;
