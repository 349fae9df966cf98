//! Shared application state injected into request handlers.

use std::sync::Arc;

use crate::application::services::{
    AccountService, AuthService, InviteService, LinkService, SignupService,
};

/// Application state shared across all handlers.
///
/// Services hold their repositories as trait objects, so tests can assemble a
/// state over mock repositories without a database.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub invite_service: Arc<InviteService>,
    pub signup_service: Arc<SignupService>,
    pub account_service: Arc<AccountService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Creates new application state.
    pub fn new(
        link_service: Arc<LinkService>,
        invite_service: Arc<InviteService>,
        signup_service: Arc<SignupService>,
        account_service: Arc<AccountService>,
        auth_service: Arc<AuthService>,
    ) -> Self {
        Self {
            link_service,
            invite_service,
            signup_service,
            account_service,
            auth_service,
        }
    }
}
