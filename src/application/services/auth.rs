//! Signup and login.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, User};
use crate::infrastructure::password::{hash_password, verify_password};
use crate::infrastructure::{TokenService, UserStore};

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Signup input.
#[derive(Debug, Clone)]
pub struct Signup {
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

/// Login input.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// A successfully authenticated session: the issued token plus the account
/// it was issued for.
#[derive(Debug, Clone)]
pub struct AuthSuccess {
    pub token: String,
    pub user: User,
}

/// Account registration and credential verification.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    /// Creates the service over the given store and token service.
    #[must_use]
    pub const fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Registers a new account and issues a token immediately, so signup
    /// doubles as login.
    ///
    /// # Errors
    ///
    /// - `Validation` for a malformed email or short password
    /// - `Conflict` when the email is already registered
    pub async fn signup(&self, request: Signup) -> DomainResult<AuthSuccess> {
        if request.email.trim().is_empty() {
            return Err(DomainError::Validation("Email is required".to_string()));
        }
        if !User::is_valid_email(&request.email) {
            return Err(DomainError::Validation(
                "Email should be valid".to_string(),
            ));
        }
        if request.password.trim().is_empty() {
            return Err(DomainError::Validation("Password is required".to_string()));
        }
        if request.password.len() < MIN_PASSWORD_LENGTH {
            return Err(DomainError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }
        if self.users.email_exists(&request.email).await? {
            return Err(DomainError::Conflict("Email already exists".to_string()));
        }

        let password_hash = hash_password(&request.password)
            .map_err(|error| DomainError::Store(error.to_string()))?;
        let user = self
            .users
            .insert(User::new(request.email, password_hash, request.full_name))
            .await?;
        let token = self
            .tokens
            .issue(&user.email)
            .map_err(|error| DomainError::Store(error.to_string()))?;

        Ok(AuthSuccess { token, user })
    }

    /// Verifies credentials and issues a token.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCredentials` for an unknown email and for a wrong
    /// password alike; the two cases are indistinguishable to the caller.
    pub async fn login(&self, request: Credentials) -> DomainResult<AuthSuccess> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        let matches = verify_password(&request.password, &user.password_hash)
            .map_err(|error| DomainError::Store(error.to_string()))?;
        if !matches {
            return Err(DomainError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&user.email)
            .map_err(|error| DomainError::Store(error.to_string()))?;

        Ok(AuthSuccess { token, user })
    }
}
