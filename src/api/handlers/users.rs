//! Handlers for admin user management.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::api::dto::users::{UserItem, UserListResponse};
use crate::domain::entities::Account;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all accounts. Admin-only.
///
/// # Endpoint
///
/// `GET /api/users`
pub async fn list_users_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
) -> Result<Json<UserListResponse>, AppError> {
    let accounts = state.account_service.list_accounts(&account).await?;

    Ok(Json(UserListResponse {
        users: accounts
            .into_iter()
            .map(|a| UserItem {
                id: a.id,
                email: a.email,
                is_admin: a.is_admin,
                created_at: a.created_at,
            })
            .collect(),
    }))
}

/// Deletes an account. Admin-only; self-deletion is rejected.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.account_service.delete_account(&account, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
