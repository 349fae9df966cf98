//! Invite entity gating account signup.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// An admin-minted invite code with a bounded redemption count.
///
/// An invite moves one way from active (`uses_count < max_uses`) to exhausted
/// (`uses_count == max_uses`); there is no transition back. `used_by` and
/// `used_at` track the most recent redeemer only, not a full history.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Invite {
    pub id: i64,
    pub code: String,
    pub max_uses: i32,
    pub uses_count: i32,
    pub created_by: i64,
    pub used_by: Option<i64>,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Invite {
    /// Returns true when every use has been redeemed.
    pub fn is_exhausted(&self) -> bool {
        self.uses_count >= self.max_uses
    }

    /// Redemptions still available on this invite.
    pub fn remaining_uses(&self) -> i32 {
        (self.max_uses - self.uses_count).max(0)
    }
}

/// Input data for minting a new invite.
#[derive(Debug, Clone)]
pub struct NewInvite {
    pub code: String,
    pub max_uses: i32,
    pub created_by: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invite(uses_count: i32, max_uses: i32) -> Invite {
        Invite {
            id: 1,
            code: "aB3xk9Q".to_string(),
            max_uses,
            uses_count,
            created_by: 1,
            used_by: None,
            used_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_fresh_invite_is_active() {
        let inv = invite(0, 5);
        assert!(!inv.is_exhausted());
        assert_eq!(inv.remaining_uses(), 5);
    }

    #[test]
    fn test_invite_at_ceiling_is_exhausted() {
        let inv = invite(5, 5);
        assert!(inv.is_exhausted());
        assert_eq!(inv.remaining_uses(), 0);
    }

    #[test]
    fn test_single_use_invite() {
        let inv = invite(1, 1);
        assert!(inv.is_exhausted());
    }
}
