//! Repository trait for account data access.

use crate::domain::entities::{Account, NewAccount};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing user accounts.
///
/// [`Self::count`] backs the first-user bootstrap rule: signup without an
/// invite is allowed only while zero accounts exist.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered,
    /// [`AppError::Internal`] on other database errors.
    async fn create(&self, new_account: NewAccount) -> Result<Account, AppError>;

    /// Finds an account by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Account>, AppError>;

    /// Finds an account by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError>;

    /// Sets or clears the admin flag. Returns `Ok(true)` if a row changed.
    async fn set_admin(&self, id: i64, is_admin: bool) -> Result<bool, AppError>;

    /// Counts existing accounts.
    async fn count(&self) -> Result<i64, AppError>;

    /// Lists all accounts, newest first.
    async fn list(&self) -> Result<Vec<Account>, AppError>;

    /// Deletes an account by id. Returns `Ok(true)` if a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
