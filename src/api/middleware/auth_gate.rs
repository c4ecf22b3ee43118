//! Per-request authentication gate.
//!
//! Runs once per request, before any handler. Allow-listed paths (signup,
//! login, liveness probes) bypass the gate entirely. For everything else the
//! gate tries to turn a `Authorization: Bearer <token>` header into an
//! attached identity:
//!
//! - expired, bad-signature, and malformed tokens are logged as distinct
//!   failure kinds but only result in no identity being attached;
//! - a valid token whose subject no longer resolves to an account attaches
//!   nothing either;
//! - the identity is attached to the request at most once and is never
//!   overwritten by a later layer.
//!
//! Whether a missing identity rejects the request is decided by the
//! [`AccessMode`] fixed at startup: `Enforced` rejects before any handler
//! runs, `Open` lets the request through and leaves the rejection to the
//! [`CurrentUser`] extractor on protected handlers. Either way a protected
//! operation without an identity produces the same unauthenticated envelope
//! instead of reaching a service with a missing user.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::domain::User;
use crate::infrastructure::{AccessMode, AppDependencies, TokenError};

use super::error_handler::ApiFailure;

/// Paths that skip authentication entirely, matched exactly or as a prefix
/// followed by `/`.
const PUBLIC_PATHS: &[&str] = &["/", "/health", "/auth/signup", "/auth/login", "/public/test"];

/// The authenticated user attached to the request by the gate.
///
/// Handlers take this as an extractor; extraction fails with the
/// unauthenticated envelope when the gate attached no identity.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiFailure;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or_else(ApiFailure::unauthenticated)
    }
}

/// Returns `true` for allow-listed paths.
fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS
        .iter()
        .any(|public| path == *public || path.starts_with(&format!("{public}/")))
}

/// Extracts the bearer token from the Authorization header, if any.
fn bearer_token(parts: &axum::http::HeaderMap) -> Option<String> {
    parts
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
}

/// The gate middleware. See the module docs for the full contract.
pub async fn auth_gate(
    State(dependencies): State<AppDependencies>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    if is_public_path(&path) {
        return next.run(request).await;
    }

    if let Some(token) = bearer_token(request.headers()) {
        match dependencies.token_service().validate(&token) {
            Ok(subject) => match dependencies.users().find_by_email(&subject).await {
                Ok(Some(user)) => {
                    // Attach at most once; never overwrite an earlier identity.
                    if request.extensions().get::<CurrentUser>().is_none() {
                        tracing::debug!(subject = %subject, "request authenticated");
                        request.extensions_mut().insert(CurrentUser(user));
                    }
                }
                Ok(None) => {
                    tracing::warn!(subject = %subject, "token subject no longer resolves to an account");
                }
                Err(error) => {
                    tracing::error!(%error, "account lookup failed during authentication");
                }
            },
            Err(TokenError::Expired) => tracing::warn!("bearer token expired"),
            Err(TokenError::InvalidSignature) => tracing::warn!(
                secret = dependencies.token_service().masked_secret(),
                "bearer token signature invalid"
            ),
            Err(_) => tracing::warn!("bearer token malformed"),
        }
    } else {
        tracing::debug!(%path, "no bearer token on request");
    }

    match dependencies.access_mode() {
        AccessMode::Open => next.run(request).await,
        AccessMode::Enforced => {
            if request.extensions().get::<CurrentUser>().is_some() {
                next.run(request).await
            } else {
                ApiFailure::unauthenticated().into_response()
            }
        }
    }
}
