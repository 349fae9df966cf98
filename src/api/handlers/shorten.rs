//! Handler for link shortening endpoint.

use axum::{extract::State, http::StatusCode, Extension, Json};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::domain::entities::Account;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for the authenticated caller.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "custom_code": "my-link"   // optional
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request` - invalid URL or malformed custom code
/// - `409 Conflict` - custom code already taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(account.id, payload.url, payload.custom_code)
        .await?;

    let short_url = state.link_service.short_url(&link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            id: link.id,
            code: link.code,
            short_url,
            target_url: link.target_url,
            is_custom: link.is_custom,
            created_at: link.created_at,
        }),
    ))
}
