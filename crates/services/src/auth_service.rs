use std::sync::Arc;

use async_trait::async_trait;
use ielts_core::model::{User, UserRole};
use storage::KeyValueStore;
use tracing::{info, warn};

use crate::error::{AuthError, RegistrationError};

/// Local-store key holding the signed-in user as JSON.
pub const USER_KEY: &str = "user";

/// Source of the current user, so guards can be tested without a store.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn current_user(&self) -> Option<User>;
}

/// Outcome of a role check for a protected page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Granted,
    /// Nobody is signed in, or the stored user is unreadable.
    RedirectToLogin,
    /// Signed in with a role that may not see the page.
    RedirectToDashboard,
}

impl AccessDecision {
    #[must_use]
    pub fn redirect_route(self) -> Option<&'static str> {
        match self {
            Self::Granted => None,
            Self::RedirectToLogin => Some("/auth/login"),
            Self::RedirectToDashboard => Some("/"),
        }
    }
}

#[must_use]
pub fn decide_access(user: Option<&User>, required: &[UserRole]) -> AccessDecision {
    match user {
        None => AccessDecision::RedirectToLogin,
        Some(user) if user.has_role(required) => AccessDecision::Granted,
        Some(_) => AccessDecision::RedirectToDashboard,
    }
}

/// Fields of the sign-up form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Registration {
    /// Checks the form in field order and reports the first problem.
    ///
    /// # Errors
    ///
    /// Returns the `RegistrationError` for the first invalid field.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.full_name.trim().is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        if !looks_like_email(self.email.trim()) {
            return Err(RegistrationError::InvalidEmail);
        }
        if self.password.is_empty() {
            return Err(RegistrationError::EmptyPassword);
        }
        if self.password != self.confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        Ok(())
    }
}

// One `@`, a non-empty local part and a dotted domain.
fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

/// Client-side sign-in kept in the key/value store. Nothing is verified.
#[derive(Clone)]
pub struct AuthService {
    local: Arc<dyn KeyValueStore>,
}

impl AuthService {
    #[must_use]
    pub fn new(local: Arc<dyn KeyValueStore>) -> Self {
        Self { local }
    }

    /// Store `email` with `role` as the current user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::User` for a blank email.
    /// Returns `AuthError::Encode` or `AuthError::Storage` if the entry cannot be written.
    pub async fn sign_in(&self, email: &str, role: UserRole) -> Result<User, AuthError> {
        let user = User::new(email, role)?;
        let json = serde_json::to_string(&user)?;
        self.local.set_item(USER_KEY, &json).await?;
        info!(email = %user.email, role = %user.role, "signed in");
        Ok(user)
    }

    /// Validate a sign-up form and sign the new user in as a candidate.
    /// The password is only compared, never stored.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Registration` for an invalid form, otherwise as
    /// [`Self::sign_in`].
    pub async fn register(&self, form: &Registration) -> Result<User, AuthError> {
        if let Err(err) = form.validate() {
            info!(reason = %err, "registration rejected");
            return Err(err.into());
        }
        let user = self.sign_in(form.email.trim(), UserRole::Candidate).await?;
        info!(email = %user.email, "registered");
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the entry cannot be removed.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.local.remove_item(USER_KEY).await?;
        info!("signed out");
        Ok(())
    }

    /// Role check for a protected page.
    pub async fn guard(&self, required: &[UserRole]) -> AccessDecision {
        let user = self.current_user().await;
        let decision = decide_access(user.as_ref(), required);
        if decision != AccessDecision::Granted {
            info!(?decision, "access denied");
        }
        decision
    }
}

#[async_trait]
impl SessionProvider for AuthService {
    async fn current_user(&self) -> Option<User> {
        let raw = match self.local.get_item(USER_KEY).await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(error = %err, "could not read stored user");
                return None;
            }
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(error = %err, "stored user is malformed; treating as signed out");
                None
            }
        }
    }
}
