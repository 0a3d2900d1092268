#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod catalog_service;
pub mod content_service;
pub mod error;
pub mod exams;
pub mod filters;
pub mod results_service;

pub use ielts_core::Clock;

pub use app_services::AppServices;
pub use auth_service::{
    AccessDecision, AuthService, Registration, SessionProvider, USER_KEY, decide_access,
};
pub use catalog_service::CatalogService;
pub use content_service::{ContentManagerService, QuestionDraft, SectionDraft, TestDetails};
pub use error::{AuthError, CatalogError, ContentError, ExamError, RegistrationError};
pub use exams::{
    ExamLoopService, ExamProgress, ExamSession, ExamTick, SubmissionReceipt, SubmitDialog,
    SubmitReason,
};
pub use filters::{TestFilters, TestSort};
pub use results_service::ResultService;
