//! Shared error types for the services crate.

use thiserror::Error;

use ielts_core::model::{QuestionId, SectionId, TestError, TestId, TestSkill, UserError};
use storage::StorageError;

/// Errors emitted by `CatalogService` and `ResultService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Why a sign-up form was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    #[error("full name cannot be empty")]
    EmptyName,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("password cannot be empty")]
    EmptyPassword,
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Registration(#[from] RegistrationError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error("stored user could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ContentManagerService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContentError {
    #[error("test not found: {0}")]
    TestNotFound(TestId),
    #[error("section not found: {0}")]
    SectionNotFound(SectionId),
    #[error("question not found: {0}")]
    QuestionNotFound(QuestionId),
    #[error("{0} tests have no question sections")]
    NoSections(TestSkill),
    #[error("question text cannot be empty")]
    EmptyQuestion,
    #[error("section title cannot be empty")]
    EmptySectionTitle,
    #[error(transparent)]
    Test(#[from] TestError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by the exam session and its loop service.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExamError {
    #[error("no {skill} test with id {id}")]
    NotFound { skill: TestSkill, id: TestId },
    #[error("exam already submitted")]
    Finished,
    #[error("submit was not requested")]
    NoPendingSubmit,
    #[error("question {0} is not part of this test")]
    UnknownQuestion(QuestionId),
    #[error("operation needs a {expected} test")]
    WrongSkill { expected: TestSkill },
    #[error(transparent)]
    Storage(#[from] StorageError),
}
