//! Repository trait for invite data access and redemption.

use crate::domain::entities::{Invite, NewInvite};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing invites.
///
/// The invite code namespace is a separate uniqueness domain from short link
/// codes: a code may coincide across the two tables without conflict.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgInviteRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InviteRepository: Send + Sync {
    /// Creates a new invite.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists,
    /// [`AppError::Internal`] on other database errors.
    async fn create(&self, new_invite: NewInvite) -> Result<Invite, AppError>;

    /// Finds an invite by its code.
    async fn find_by_code(&self, code: &str) -> Result<Option<Invite>, AppError>;

    /// Reports whether a code is already taken in the invite namespace.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Redeems one use of an invite for `redeemer_id`.
    ///
    /// Must be a single atomic read-modify-write: the increment is guarded by
    /// `uses_count < max_uses` in the same statement, so two concurrent
    /// redemptions of a one-use invite cannot both succeed.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if no invite has the code
    /// - [`AppError::Exhausted`] if every use has been redeemed
    /// - [`AppError::Internal`] on database errors
    async fn redeem(&self, code: &str, redeemer_id: i64) -> Result<Invite, AppError>;

    /// Lists all invites, newest first.
    async fn list(&self) -> Result<Vec<Invite>, AppError>;

    /// Deletes an invite by id. Returns `Ok(true)` if a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
