//! Signup and login handlers.

use axum::Json;
use axum::extract::State;

use crate::api::dto::requests::{LoginRequest, SignupRequest};
use crate::api::dto::responses::{ApiResponse, AuthResponse};
use crate::api::dto::transformers::auth_to_response;
use crate::api::middleware::ApiFailure;
use crate::application::{AuthService, Credentials, Signup};
use crate::infrastructure::AppDependencies;

fn service(dependencies: &AppDependencies) -> AuthService {
    AuthService::new(
        dependencies.users().clone(),
        dependencies.token_service().clone(),
    )
}

/// POST /auth/signup - Register an account and issue a token.
pub async fn signup(
    State(dependencies): State<AppDependencies>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiFailure> {
    let auth = service(&dependencies)
        .signup(Signup {
            email: request.email,
            password: request.password,
            full_name: request.full_name,
        })
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        "User registered successfully",
        auth_to_response(&auth),
    )))
}

/// POST /auth/login - Verify credentials and issue a token.
///
/// An unknown email and a wrong password produce the same generic message.
pub async fn login(
    State(dependencies): State<AppDependencies>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiFailure> {
    let auth = service(&dependencies)
        .login(Credentials {
            email: request.email,
            password: request.password,
        })
        .await?;

    Ok(Json(ApiResponse::success_with_message(
        "Login successful",
        auth_to_response(&auth),
    )))
}
