//! Handler for account signup with invite redemption.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::api::dto::signup::{SignupRequest, SignupResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /api/signup`
///
/// # Request Body
///
/// ```json
/// { "email": "user@example.com", "invite_code": "aB3xk9Q" }
/// ```
///
/// The invite code is required unless no accounts exist yet (first-user
/// bootstrap).
///
/// # Errors
///
/// - `400 Bad Request` - invalid email, or invite code required but missing
/// - `404 Not Found` - unknown invite code
/// - `410 Gone` - invite code fully used
/// - `409 Conflict` - email already registered
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    payload.validate()?;

    let account = state
        .signup_service
        .signup(payload.email, payload.invite_code)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            id: account.id,
            email: account.email,
            created_at: account.created_at,
        }),
    ))
}
