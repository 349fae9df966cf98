//! DTOs for admin user management endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// An account in admin listing responses.
#[derive(Debug, Serialize)]
pub struct UserItem {
    pub id: i64,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Response listing all accounts.
#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<UserItem>,
}
