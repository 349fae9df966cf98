//! Admin account management.

use std::sync::Arc;

use crate::domain::entities::Account;
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for admin-side user management.
pub struct AccountService {
    account_repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Self { account_repository }
    }

    /// Lists all accounts, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if `caller` is not an admin.
    pub async fn list_accounts(&self, caller: &Account) -> Result<Vec<Account>, AppError> {
        Self::require_admin(caller)?;
        self.account_repository.list().await
    }

    /// Deletes an account by id.
    ///
    /// Admins cannot delete their own account through this path; that would
    /// strand the system without the caller noticing mid-request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if `caller` is not an admin,
    /// [`AppError::Validation`] on self-deletion, [`AppError::NotFound`] if
    /// no account has the id.
    pub async fn delete_account(&self, caller: &Account, id: i64) -> Result<(), AppError> {
        Self::require_admin(caller)?;

        if caller.id == id {
            return Err(AppError::bad_request(
                "You cannot delete your own account",
                json!({ "id": id }),
            ));
        }

        if self.account_repository.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("Account not found", json!({ "id": id })))
        }
    }

    fn require_admin(account: &Account) -> Result<(), AppError> {
        if account.is_admin {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Only admins can manage accounts",
                json!({ "account_id": account.id }),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockAccountRepository;
    use chrono::Utc;

    fn account(id: i64, is_admin: bool) -> Account {
        Account {
            id,
            email: format!("user{}@example.com", id),
            is_admin,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_list_requires_admin() {
        let mut repo = MockAccountRepository::new();
        repo.expect_list().times(0);

        let service = AccountService::new(Arc::new(repo));
        let result = service.list_accounts(&account(2, false)).await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_delete_other_account() {
        let mut repo = MockAccountRepository::new();
        repo.expect_delete()
            .withf(|id| *id == 5)
            .times(1)
            .returning(|_| Ok(true));

        let service = AccountService::new(Arc::new(repo));
        assert!(service.delete_account(&account(1, true), 5).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_self_rejected() {
        let mut repo = MockAccountRepository::new();
        repo.expect_delete().times(0);

        let service = AccountService::new(Arc::new(repo));
        let result = service.delete_account(&account(1, true), 1).await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_account() {
        let mut repo = MockAccountRepository::new();
        repo.expect_delete().times(1).returning(|_| Ok(false));

        let service = AccountService::new(Arc::new(repo));
        let result = service.delete_account(&account(1, true), 9).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
