//! Handlers for listing and deleting the caller's links.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::api::dto::links::{LinkItem, LinkListResponse};
use crate::domain::entities::Account;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the authenticated caller's links, newest first.
///
/// # Endpoint
///
/// `GET /api/links`
pub async fn list_links_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
) -> Result<Json<LinkListResponse>, AppError> {
    let links = state.link_service.list_links(account.id).await?;

    let links = links
        .into_iter()
        .map(|link| LinkItem {
            id: link.id,
            short_url: state.link_service.short_url(&link.code),
            code: link.code,
            target_url: link.target_url,
            is_custom: link.is_custom,
            created_at: link.created_at,
        })
        .collect();

    Ok(Json(LinkListResponse { links }))
}

/// Deletes one of the caller's links.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// # Errors
///
/// Returns `404 Not Found` if the link does not exist or belongs to another
/// account.
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Extension(account): Extension<Account>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete_link(id, account.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::test_support::{state_with, test_account, MockRepos};
    use axum::{
        routing::{delete, get},
        Router,
    };
    use axum_test::TestServer;
    use chrono::Utc;

    use crate::domain::entities::ShortLink;

    fn server(repos: MockRepos) -> TestServer {
        let app = Router::new()
            .route("/api/links", get(list_links_handler))
            .route("/api/links/{id}", delete(delete_link_handler))
            .layer(Extension(test_account(1, false)))
            .with_state(state_with(repos));
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_list_own_links() {
        let mut repos = MockRepos::new();

        repos
            .links
            .expect_list_by_owner()
            .withf(|owner_id| *owner_id == 1)
            .returning(|owner_id| {
                Ok(vec![ShortLink::new(
                    3,
                    "Ab3x9".to_string(),
                    "https://example.com".to_string(),
                    owner_id,
                    false,
                    Utc::now(),
                )])
            });

        let response = server(repos).get("/api/links").await;
        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        let links = body["links"].as_array().unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0]["code"], "Ab3x9");
    }

    #[tokio::test]
    async fn test_delete_own_link() {
        let mut repos = MockRepos::new();

        repos
            .links
            .expect_delete()
            .withf(|id, owner_id| *id == 3 && *owner_id == 1)
            .returning(|_, _| Ok(true));

        let response = server(repos).delete("/api/links/3").await;
        response.assert_status(axum::http::StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_foreign_link_is_404() {
        let mut repos = MockRepos::new();

        repos.links.expect_delete().returning(|_, _| Ok(false));

        let response = server(repos).delete("/api/links/99").await;
        response.assert_status_not_found();
    }
}
