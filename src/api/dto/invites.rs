//! DTOs for invite management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to mint a new invite.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInviteRequest {
    /// Redemption ceiling. Defaults to 1 when omitted.
    #[validate(range(min = 1, message = "max_uses must be a positive integer"))]
    pub max_uses: Option<i32>,
}

/// An invite in API responses.
#[derive(Debug, Serialize)]
pub struct InviteResponse {
    pub id: i64,
    pub code: String,
    pub max_uses: i32,
    pub uses_count: i32,
    pub remaining_uses: i32,
    pub used_by: Option<i64>,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Response listing all invites.
#[derive(Debug, Serialize)]
pub struct InviteListResponse {
    pub invites: Vec<InviteResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_uses_is_valid() {
        let request = CreateInviteRequest { max_uses: None };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_max_uses() {
        let request = CreateInviteRequest { max_uses: Some(0) };
        assert!(request.validate().is_err());
    }
}
