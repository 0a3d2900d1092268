use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("email cannot be empty")]
    EmptyEmail,

    #[error("unknown role: {0}")]
    UnknownRole(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    ContentManager,
    Candidate,
}

impl UserRole {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::ContentManager => "content_manager",
            Self::Candidate => "candidate",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = UserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "admin" => Ok(Self::Admin),
            "content_manager" => Ok(Self::ContentManager),
            "candidate" => Ok(Self::Candidate),
            other => Err(UserError::UnknownRole(other.to_owned())),
        }
    }
}

/// The signed-in user as kept in local storage. Never verified against a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub role: UserRole,
}

impl User {
    /// # Errors
    ///
    /// Returns `UserError::EmptyEmail` if the email is blank.
    pub fn new(email: impl Into<String>, role: UserRole) -> Result<Self, UserError> {
        let email = email.into().trim().to_owned();
        if email.is_empty() {
            return Err(UserError::EmptyEmail);
        }
        Ok(Self { email, role })
    }

    #[must_use]
    pub fn has_role(&self, allowed: &[UserRole]) -> bool {
        allowed.contains(&self.role)
    }
}
