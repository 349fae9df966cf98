//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// Doubles as the uniqueness oracle for the short link code namespace:
/// [`Self::code_exists`] answers "is this code already taken" and
/// [`Self::create`] enforces uniqueness at insert time, which is the final
/// arbiter when two concurrent allocations draw the same code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists (unique
    /// constraint violation), [`AppError::Internal`] on other database errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Reports whether a code is already taken in the short link namespace.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the lookup itself fails; callers must
    /// propagate this rather than assume the code is free.
    async fn code_exists(&self, code: &str) -> Result<bool, AppError>;

    /// Lists an owner's links, newest first.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<ShortLink>, AppError>;

    /// Deletes a link owned by `owner_id`.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` when no link
    /// matches the id and owner (including links owned by someone else).
    async fn delete(&self, id: i64, owner_id: i64) -> Result<bool, AppError>;
}
