//! Signup flow: first-user bootstrap and invite redemption.

use std::sync::Arc;

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::{AccountRepository, InviteRepository};
use crate::error::AppError;
use serde_json::json;

/// Service admitting new accounts.
///
/// The very first account signs up without an invite (decided by counting
/// existing accounts, not by a flag). Every later signup must present a
/// valid, non-exhausted invite code, whose redemption is a single atomic
/// conditional increment at the persistence layer.
pub struct SignupService {
    account_repository: Arc<dyn AccountRepository>,
    invite_repository: Arc<dyn InviteRepository>,
}

impl SignupService {
    /// Creates a new signup service.
    pub fn new(
        account_repository: Arc<dyn AccountRepository>,
        invite_repository: Arc<dyn InviteRepository>,
    ) -> Self {
        Self {
            account_repository,
            invite_repository,
        }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if an invite code is required but missing
    /// - [`AppError::NotFound`] if the invite code does not exist
    /// - [`AppError::Exhausted`] if the invite has no uses remaining
    /// - [`AppError::Conflict`] if the email is already registered
    pub async fn signup(
        &self,
        email: String,
        invite_code: Option<String>,
    ) -> Result<Account, AppError> {
        let is_first_user = self.account_repository.count().await? == 0;

        if is_first_user {
            return self
                .account_repository
                .create(NewAccount {
                    email,
                    is_admin: false,
                })
                .await;
        }

        let code = invite_code
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or_else(|| {
                AppError::bad_request("Invite code is required", json!({}))
            })?;

        // Fail fast before creating the account. The authoritative check is
        // the conditional increment below; this lookup only keeps obviously
        // doomed signups from touching the accounts table.
        let invite = self
            .invite_repository
            .find_by_code(&code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Invalid invite code", json!({ "code": code }))
            })?;

        if invite.is_exhausted() {
            return Err(AppError::exhausted(
                "Invite code has been fully used",
                json!({ "code": code }),
            ));
        }

        let account = self
            .account_repository
            .create(NewAccount {
                email,
                is_admin: false,
            })
            .await?;

        match self.invite_repository.redeem(&code, account.id).await {
            Ok(_) => Ok(account),
            Err(e) => {
                // The invite was snatched between the precheck and the
                // increment. Remove the fresh account so no partial state
                // survives the failed signup.
                if let Err(cleanup) = self.account_repository.delete(account.id).await {
                    tracing::error!(
                        account_id = account.id,
                        error = %cleanup,
                        "failed to roll back account after invite redemption failure"
                    );
                }
                Err(e)
            }
        }
    }
}
