//! Invite minting and administration.

use std::sync::Arc;

use crate::domain::entities::{Account, Invite, NewInvite};
use crate::domain::repositories::InviteRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_invite_code;
use serde_json::json;

/// Cap on generated-code draws before giving up.
const MAX_CODE_ATTEMPTS: usize = 32;

/// Service for minting and managing invites. Admin-only throughout.
///
/// Invite codes are always generated, never caller-supplied, and are drawn
/// from their own uniqueness namespace independent of short link codes.
pub struct InviteService {
    invite_repository: Arc<dyn InviteRepository>,
}

impl InviteService {
    /// Creates a new invite service.
    pub fn new(invite_repository: Arc<dyn InviteRepository>) -> Self {
        Self { invite_repository }
    }

    /// Mints a new invite with `max_uses` redemptions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if `minter` is not an admin,
    /// [`AppError::Validation`] if `max_uses` is not positive.
    pub async fn create_invite(
        &self,
        minter: &Account,
        max_uses: i32,
    ) -> Result<Invite, AppError> {
        Self::require_admin(minter)?;

        if max_uses < 1 {
            return Err(AppError::bad_request(
                "max_uses must be a positive integer",
                json!({ "max_uses": max_uses }),
            ));
        }

        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_invite_code();

            if self.invite_repository.code_exists(&code).await? {
                continue;
            }

            match self
                .invite_repository
                .create(NewInvite {
                    code,
                    max_uses,
                    created_by: minter.id,
                })
                .await
            {
                Ok(invite) => return Ok(invite),
                // Insert-time unique violation: another mint won the draw.
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique invite code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Lists all invites, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if `caller` is not an admin.
    pub async fn list_invites(&self, caller: &Account) -> Result<Vec<Invite>, AppError> {
        Self::require_admin(caller)?;
        self.invite_repository.list().await
    }

    /// Deletes an invite by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if `caller` is not an admin,
    /// [`AppError::NotFound`] if no invite has the id.
    pub async fn delete_invite(&self, caller: &Account, id: i64) -> Result<(), AppError> {
        Self::require_admin(caller)?;

        if self.invite_repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Invite not found", json!({ "id": id })))
        }
    }

    fn require_admin(account: &Account) -> Result<(), AppError> {
        if account.is_admin {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Only admins can manage invites",
                json!({ "account_id": account.id }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockInviteRepository;
    use chrono::Utc;

    fn account(id: i64, is_admin: bool) -> Account {
        Account {
            id,
            email: format!("user{}@example.com", id),
            is_admin,
            created_at: Utc::now(),
        }
    }

    fn test_invite(code: &str, max_uses: i32) -> Invite {
        Invite {
            id: 1,
            code: code.to_string(),
            max_uses,
            uses_count: 0,
            created_by: 1,
            used_by: None,
            used_at: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_invite_success() {
        let mut repo = MockInviteRepository::new();

        repo.expect_code_exists()
            .withf(|code| code.len() == 7 || code.len() == 8)
            .times(1)
            .returning(|_| Ok(false));

        repo.expect_create()
            .withf(|new_invite| new_invite.max_uses == 5 && new_invite.created_by == 1)
            .times(1)
            .returning(|new_invite| Ok(test_invite(&new_invite.code, new_invite.max_uses)));

        let service = InviteService::new(Arc::new(repo));
        let result = service.create_invite(&account(1, true), 5).await;

        assert!(result.is_ok());
        let invite = result.unwrap();
        assert!(invite.code.len() == 7 || invite.code.len() == 8);
    }

    #[tokio::test]
    async fn test_create_invite_non_admin_forbidden() {
        let mut repo = MockInviteRepository::new();
        repo.expect_code_exists().times(0);
        repo.expect_create().times(0);

        let service = InviteService::new(Arc::new(repo));
        let result = service.create_invite(&account(2, false), 1).await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_create_invite_rejects_non_positive_max_uses() {
        let repo = MockInviteRepository::new();
        let service = InviteService::new(Arc::new(repo));

        let result = service.create_invite(&account(1, true), 0).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_invite_redraws_on_collision() {
        let mut repo = MockInviteRepository::new();

        let mut calls = 0;
        repo.expect_code_exists().times(2).returning(move |_| {
            calls += 1;
            Ok(calls == 1)
        });

        repo.expect_create()
            .times(1)
            .returning(|new_invite| Ok(test_invite(&new_invite.code, new_invite.max_uses)));

        let service = InviteService::new(Arc::new(repo));
        assert!(service.create_invite(&account(1, true), 1).await.is_ok());
    }

    #[tokio::test]
    async fn test_list_invites_non_admin_forbidden() {
        let mut repo = MockInviteRepository::new();
        repo.expect_list().times(0);

        let service = InviteService::new(Arc::new(repo));
        let result = service.list_invites(&account(2, false)).await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_invite() {
        let mut repo = MockInviteRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = InviteService::new(Arc::new(repo));
        let result = service.delete_invite(&account(1, true), 99).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
