//! Short link creation, resolution, and deletion.

use std::sync::Arc;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_link_code, validate_custom_code};
use serde_json::json;
use url::Url;

/// Cap on generated-code draws before giving up.
///
/// At 5 characters over a 62-symbol alphabet the code space holds ~916M
/// values, so hitting this many collisions in a row means the store is in a
/// pathological state and the caller deserves a hard error instead of an
/// endless loop.
const MAX_CODE_ATTEMPTS: usize = 32;

/// Service for creating and resolving shortened links.
///
/// A custom code is an identity claim: it is validated strictly and a
/// conflict is surfaced to the caller without retrying. A generated code is
/// an implementation detail: collisions are redrawn transparently, and an
/// insert-time unique violation (two allocations racing on the same draw)
/// counts as one more collision.
pub struct LinkService {
    link_repository: Arc<dyn ShortLinkRepository>,
    base_url: String,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `base_url` is prefixed to codes when rendering full short URLs.
    pub fn new(link_repository: Arc<dyn ShortLinkRepository>, base_url: String) -> Self {
        Self {
            link_repository,
            base_url,
        }
    }

    /// Creates a short link for `owner_id`.
    ///
    /// # Arguments
    ///
    /// - `target_url` - the URL to shorten; must parse as an absolute URL,
    ///   any scheme accepted
    /// - `custom_code` - optional caller-chosen code (validated if provided)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL does not parse or the
    /// custom code is malformed, [`AppError::Conflict`] if the custom code is
    /// already taken.
    pub async fn create_short_link(
        &self,
        owner_id: i64,
        target_url: String,
        custom_code: Option<String>,
    ) -> Result<ShortLink, AppError> {
        if Url::parse(&target_url).is_err() {
            return Err(AppError::bad_request(
                "Invalid URL",
                json!({ "url": target_url }),
            ));
        }

        let custom_code = custom_code.filter(|c| !c.is_empty());

        if let Some(custom) = custom_code {
            validate_custom_code(&custom)?;

            if self.link_repository.code_exists(&custom).await? {
                return Err(AppError::conflict(
                    "This code is already taken",
                    json!({ "code": custom }),
                ));
            }

            return self
                .link_repository
                .create(NewShortLink {
                    code: custom,
                    target_url,
                    owner_id,
                    is_custom: true,
                })
                .await;
        }

        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_link_code();

            if self.link_repository.code_exists(&code).await? {
                continue;
            }

            match self
                .link_repository
                .create(NewShortLink {
                    code,
                    target_url: target_url.clone(),
                    owner_id,
                    is_custom: false,
                })
                .await
            {
                Ok(link) => return Ok(link),
                // Lost the race between the existence check and the insert:
                // another allocation persisted the same draw first. Redraw.
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves a short code to its target URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has the code.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .map(|link| link.target_url)
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "code": code }))
            })
    }

    /// Lists an owner's links, newest first.
    pub async fn list_links(&self, owner_id: i64) -> Result<Vec<ShortLink>, AppError> {
        self.link_repository.list_by_owner(owner_id).await
    }

    /// Deletes a link owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link does not exist or belongs
    /// to another account.
    pub async fn delete_link(&self, id: i64, owner_id: i64) -> Result<(), AppError> {
        if self.link_repository.delete(id, owner_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(
                "Short link not found",
                json!({ "id": id }),
            ))
        }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockShortLinkRepository;
    use chrono::Utc;

    fn test_link(id: i64, code: &str, url: &str, is_custom: bool) -> ShortLink {
        ShortLink::new(id, code.to_string(), url.to_string(), 1, is_custom, Utc::now())
    }

    fn service(repo: MockShortLinkRepository) -> LinkService {
        LinkService::new(Arc::new(repo), "https://go.example.com".to_string())
    }

    #[tokio::test]
    async fn test_create_with_generated_code() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_code_exists()
            .withf(|code| code.len() == 5)
            .times(1)
            .returning(|_| Ok(false));

        repo.expect_create()
            .withf(|new_link| !new_link.is_custom && new_link.code.len() == 5)
            .times(1)
            .returning(|new_link| Ok(test_link(10, &new_link.code, &new_link.target_url, false)));

        let result = service(repo)
            .create_short_link(1, "https://example.com".to_string(), None)
            .await;

        assert!(result.is_ok());
        let link = result.unwrap();
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.code.len(), 5);
    }

    #[tokio::test]
    async fn test_create_redraws_on_collision() {
        let mut repo = MockShortLinkRepository::new();

        // First draw collides, second is free.
        let mut calls = 0;
        repo.expect_code_exists()
            .times(2)
            .returning(move |_| {
                calls += 1;
                Ok(calls == 1)
            });

        repo.expect_create()
            .times(1)
            .returning(|new_link| Ok(test_link(10, &new_link.code, &new_link.target_url, false)));

        let result = service(repo)
            .create_short_link(1, "https://example.com".to_string(), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_redraws_on_insert_race() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_code_exists().times(2).returning(|_| Ok(false));

        // The existence check passed, but another writer inserted the same
        // code first; the service must treat the conflict as a collision.
        let mut calls = 0;
        repo.expect_create().times(2).returning(move |new_link| {
            calls += 1;
            if calls == 1 {
                Err(AppError::conflict("Unique constraint violation", serde_json::json!({})))
            } else {
                Ok(test_link(10, &new_link.code, &new_link.target_url, false))
            }
        });

        let result = service(repo)
            .create_short_link(1, "https://example.com".to_string(), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_fails_after_too_many_collisions() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_code_exists()
            .times(MAX_CODE_ATTEMPTS)
            .returning(|_| Ok(true));

        let result = service(repo)
            .create_short_link(1, "https://example.com".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_create_with_custom_code() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_code_exists()
            .withf(|code| code == "my-code_1")
            .times(1)
            .returning(|_| Ok(false));

        repo.expect_create()
            .withf(|new_link| new_link.code == "my-code_1" && new_link.is_custom)
            .times(1)
            .returning(|new_link| Ok(test_link(10, &new_link.code, &new_link.target_url, true)));

        let result = service(repo)
            .create_short_link(
                1,
                "https://example.com".to_string(),
                Some("my-code_1".to_string()),
            )
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().code, "my-code_1");
    }

    #[tokio::test]
    async fn test_custom_code_conflict_is_not_retried() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_code_exists()
            .times(1)
            .returning(|_| Ok(true));
        repo.expect_create().times(0);

        let result = service(repo)
            .create_short_link(
                1,
                "https://example.com".to_string(),
                Some("taken".to_string()),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_custom_code_too_short_rejected_before_lookup() {
        let mut repo = MockShortLinkRepository::new();

        // No oracle consultation for malformed codes.
        repo.expect_code_exists().times(0);
        repo.expect_create().times(0);

        let result = service(repo)
            .create_short_link(
                1,
                "https://example.com".to_string(),
                Some("ab".to_string()),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_invalid_url_rejected() {
        let repo = MockShortLinkRepository::new();

        let result = service(repo)
            .create_short_link(1, "not a url".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_arbitrary_scheme_accepted() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_code_exists().times(1).returning(|_| Ok(false));
        repo.expect_create()
            .times(1)
            .returning(|new_link| Ok(test_link(10, &new_link.code, &new_link.target_url, false)));

        let result = service(repo)
            .create_short_link(1, "ftp://files.example.com/a".to_string(), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_oracle_failure_propagates() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_code_exists()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", serde_json::json!({}))));
        repo.expect_create().times(0);

        let result = service(repo)
            .create_short_link(1, "https://example.com".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_resolve_round_trip() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_find_by_code()
            .withf(|code| code == "Ab3x9")
            .times(1)
            .returning(|_| Ok(Some(test_link(10, "Ab3x9", "https://example.com/x", false))));

        let target = service(repo).resolve("Ab3x9").await.unwrap();
        assert_eq!(target, "https://example.com/x");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_find_by_code().times(1).returning(|_| Ok(None));

        let result = service(repo).resolve("nope1").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_not_owner() {
        let mut repo = MockShortLinkRepository::new();

        repo.expect_delete()
            .withf(|id, owner_id| *id == 5 && *owner_id == 2)
            .times(1)
            .returning(|_, _| Ok(false));

        let result = service(repo).delete_link(5, 2).await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[test]
    fn test_short_url_trims_trailing_slash() {
        let repo = MockShortLinkRepository::new();
        let service = LinkService::new(Arc::new(repo), "https://go.example.com/".to_string());
        assert_eq!(service.short_url("Ab3x9"), "https://go.example.com/Ab3x9");
    }
}
