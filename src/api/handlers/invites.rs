//! Handlers for admin invite management.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use validator::Validate;

use crate::api::dto::invites::{CreateInviteRequest, InviteListResponse, InviteResponse};
use crate::domain::entities::{Account, Invite};
use crate::error::AppError;
use crate::state::AppState;

fn to_response(invite: Invite) -> InviteResponse {
    InviteResponse {
        id: invite.id,
        max_uses: invite.max_uses,
        uses_count: invite.uses_count,
        remaining_uses: invite.remaining_uses(),
        used_by: invite.used_by,
        used_at: invite.used_at,
        created_at: invite.created_at,
        code: invite.code,
    }
}

/// Mints a new invite. Admin-only.
///
/// # Endpoint
///
/// `POST /api/invites`
///
/// # Request Body
///
/// ```json
/// { "max_uses": 5 }
/// ```
///
/// `max_uses` defaults to 1 when omitted.
pub async fn create_invite_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
    Json(payload): Json<CreateInviteRequest>,
) -> Result<(StatusCode, Json<InviteResponse>), AppError> {
    payload.validate()?;

    let invite = state
        .invite_service
        .create_invite(&account, payload.max_uses.unwrap_or(1))
        .await?;

    Ok((StatusCode::CREATED, Json(to_response(invite))))
}

/// Lists all invites. Admin-only.
///
/// # Endpoint
///
/// `GET /api/invites`
pub async fn list_invites_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
) -> Result<Json<InviteListResponse>, AppError> {
    let invites = state.invite_service.list_invites(&account).await?;

    Ok(Json(InviteListResponse {
        invites: invites.into_iter().map(to_response).collect(),
    }))
}

/// Deletes an invite. Admin-only.
///
/// # Endpoint
///
/// `DELETE /api/invites/{id}`
pub async fn delete_invite_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.invite_service.delete_invite(&account, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
