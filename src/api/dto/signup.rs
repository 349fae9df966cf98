//! DTOs for the signup endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a new account.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    /// Invite code. Required unless this is the very first account in the
    /// system.
    pub invite_code: Option<String>,
}

/// Response for a created account.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub id: i64,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
