//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `307 Temporary Redirect` so clients keep resolving through
/// the service and owners can delete links at any time.
///
/// # Errors
///
/// Returns `404 Not Found` for unknown codes.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Redirect, AppError> {
    let target = state.link_service.resolve(&code).await?;
    Ok(Redirect::temporary(&target))
}
