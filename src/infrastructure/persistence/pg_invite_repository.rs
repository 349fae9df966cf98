//! PostgreSQL implementation of invite repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Invite, NewInvite};
use crate::domain::repositories::InviteRepository;
use crate::error::AppError;

/// PostgreSQL repository for invite storage and redemption.
pub struct PgInviteRepository {
    pool: Arc<PgPool>,
}

impl PgInviteRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteRepository for PgInviteRepository {
    async fn create(&self, new_invite: NewInvite) -> Result<Invite, AppError> {
        let invite = sqlx::query_as::<_, Invite>(
            r#"
            INSERT INTO invites (code, max_uses, created_by)
            VALUES ($1, $2, $3)
            RETURNING id, code, max_uses, uses_count, created_by, used_by, used_at, created_at
            "#,
        )
        .bind(&new_invite.code)
        .bind(new_invite.max_uses)
        .bind(new_invite.created_by)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(invite)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Invite>, AppError> {
        let invite = sqlx::query_as::<_, Invite>(
            r#"
            SELECT id, code, max_uses, uses_count, created_by, used_by, used_at, created_at
            FROM invites
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(invite)
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM invites WHERE code = $1)",
        )
        .bind(code)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn redeem(&self, code: &str, redeemer_id: i64) -> Result<Invite, AppError> {
        // Single conditional read-modify-write: the ceiling check and the
        // increment happen in one statement, so concurrent redemptions of the
        // last use cannot both pass.
        let invite = sqlx::query_as::<_, Invite>(
            r#"
            UPDATE invites
            SET uses_count = uses_count + 1,
                used_by = $2,
                used_at = NOW()
            WHERE code = $1
              AND uses_count < max_uses
            RETURNING id, code, max_uses, uses_count, created_by, used_by, used_at, created_at
            "#,
        )
        .bind(code)
        .bind(redeemer_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match invite {
            Some(invite) => Ok(invite),
            None => {
                // Zero rows means either the code is unknown or the ceiling
                // was already reached; one more lookup tells them apart.
                if self.find_by_code(code).await?.is_some() {
                    Err(AppError::exhausted(
                        "Invite code has been fully used",
                        json!({ "code": code }),
                    ))
                } else {
                    Err(AppError::not_found(
                        "Invalid invite code",
                        json!({ "code": code }),
                    ))
                }
            }
        }
    }

    async fn list(&self) -> Result<Vec<Invite>, AppError> {
        let invites = sqlx::query_as::<_, Invite>(
            r#"
            SELECT id, code, max_uses, uses_count, created_by, used_by, used_at, created_at
            FROM invites
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(invites)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM invites WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
