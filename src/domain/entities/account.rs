//! Account entity and API token credential.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A registered user account.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Account {
    pub id: i64,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new account.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub is_admin: bool,
}

/// A stored API token credential.
///
/// Only the HMAC hash of the token is persisted; the raw token is shown once
/// at creation time and never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApiToken {
    pub id: i64,
    pub account_id: i64,
    pub name: String,
    pub token_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub revoked_at: Option<DateTime<Utc>>,
}
