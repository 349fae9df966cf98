//! Repository trait for API token authentication.

use crate::domain::entities::{Account, ApiToken};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for API token storage and lookup.
///
/// Tokens are stored hashed; lookups always take the hash, never the raw
/// token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Resolves a token hash to its owning account.
    ///
    /// Revoked tokens never resolve.
    async fn find_account_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<Account>, AppError>;

    /// Updates the `last_used_at` timestamp for a token.
    async fn touch_last_used(&self, token_hash: &str) -> Result<(), AppError>;

    /// Stores a new token credential for an account.
    async fn create_token(
        &self,
        account_id: i64,
        name: &str,
        token_hash: &str,
    ) -> Result<ApiToken, AppError>;

    /// Revokes a token by id. Returns `Ok(true)` if a live token was revoked.
    async fn revoke_token(&self, id: i64) -> Result<bool, AppError>;
}
