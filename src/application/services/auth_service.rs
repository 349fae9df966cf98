//! Authentication service for API token validation.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::entities::{Account, ApiToken};
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;

type HmacSha256 = Hmac<Sha256>;

/// Length of raw API tokens issued by [`AuthService::issue_token`].
const RAW_TOKEN_LENGTH: usize = 40;

/// Service for authenticating API requests via Bearer tokens.
///
/// Tokens are hashed with HMAC-SHA256 (keyed by `signing_secret`) before
/// storage and comparison. An attacker with read-only access to the database
/// cannot verify or forge tokens without the server-side secret.
pub struct AuthService {
    repository: Arc<dyn TokenRepository>,
    signing_secret: String,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// `signing_secret` must match the value used when tokens were created.
    pub fn new(repository: Arc<dyn TokenRepository>, signing_secret: String) -> Self {
        Self {
            repository,
            signing_secret,
        }
    }

    /// Hashes a raw token with HMAC-SHA256 using the server signing secret.
    ///
    /// Returns a 64-character lowercase hex-encoded MAC.
    fn hash_token(&self, token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(self.signing_secret.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Authenticates a raw token and resolves its owning account.
    ///
    /// On success, updates the token's `last_used_at` timestamp for audit
    /// purposes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token hash does not match
    /// any live credential, [`AppError::Internal`] on database errors.
    pub async fn authenticate(&self, token: &str) -> Result<Account, AppError> {
        let token_hash = self.hash_token(token);

        let account = self
            .repository
            .find_account_by_token_hash(&token_hash)
            .await?
            .ok_or_else(|| {
                AppError::unauthorized(
                    "Unauthorized",
                    json!({"reason": "Invalid or revoked token"}),
                )
            })?;

        let _ = self.repository.touch_last_used(&token_hash).await;

        Ok(account)
    }

    /// Issues a new API token for an account.
    ///
    /// Returns the raw token alongside the stored record. The raw value is
    /// never persisted and cannot be recovered later.
    pub async fn issue_token(
        &self,
        account_id: i64,
        name: &str,
    ) -> Result<(String, ApiToken), AppError> {
        let raw = generate_code(RAW_TOKEN_LENGTH);
        let hash = self.hash_token(&raw);

        let record = self.repository.create_token(account_id, name, &hash).await?;

        Ok((raw, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockTokenRepository;
    use chrono::Utc;

    fn test_secret() -> String {
        "test-signing-secret".to_string()
    }

    fn test_account(is_admin: bool) -> Account {
        Account {
            id: 1,
            email: "user@example.com".to_string(),
            is_admin,
            created_at: Utc::now(),
        }
    }

    fn compute_expected_hash(token: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(test_secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(token.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let mut mock_repo = MockTokenRepository::new();

        let token = "valid-token";
        let expected_hash = compute_expected_hash(token);

        mock_repo
            .expect_find_account_by_token_hash()
            .withf(move |hash| hash == expected_hash)
            .times(1)
            .returning(|_| Ok(Some(test_account(false))));

        mock_repo
            .expect_touch_last_used()
            .times(1)
            .returning(|_| Ok(()));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let result = service.authenticate(token).await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_authenticate_invalid_token() {
        let mut mock_repo = MockTokenRepository::new();

        mock_repo
            .expect_find_account_by_token_hash()
            .times(1)
            .returning(|_| Ok(None));

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let result = service.authenticate("invalid-token").await;

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[tokio::test]
    async fn test_hash_token_consistency() {
        let mock_repo = MockTokenRepository::new();
        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let hash1 = service.hash_token("test-token");
        let hash2 = service.hash_token("test-token");

        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);
    }

    #[tokio::test]
    async fn test_hash_token_secret_matters() {
        let svc1 = AuthService::new(Arc::new(MockTokenRepository::new()), "secret-a".to_string());
        let svc2 = AuthService::new(Arc::new(MockTokenRepository::new()), "secret-b".to_string());

        assert_ne!(svc1.hash_token("token"), svc2.hash_token("token"));
    }

    #[tokio::test]
    async fn test_issue_token_stores_hash_not_raw() {
        let mut mock_repo = MockTokenRepository::new();

        mock_repo
            .expect_create_token()
            .withf(|account_id, name, hash| {
                *account_id == 1 && name == "ci" && hash.len() == 64
            })
            .times(1)
            .returning(|account_id, name, hash| {
                Ok(ApiToken {
                    id: 1,
                    account_id,
                    name: name.to_string(),
                    token_hash: hash.to_string(),
                    created_at: Utc::now(),
                    last_used_at: None,
                    revoked_at: None,
                })
            });

        let service = AuthService::new(Arc::new(mock_repo), test_secret());

        let (raw, record) = service.issue_token(1, "ci").await.unwrap();
        assert_eq!(raw.len(), RAW_TOKEN_LENGTH);
        assert_ne!(raw, record.token_hash);
    }
}
