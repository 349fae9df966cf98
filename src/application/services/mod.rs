//! Business logic services orchestrating domain operations.

pub mod account_service;
pub mod auth_service;
pub mod invite_service;
pub mod link_service;
pub mod signup_service;

pub use account_service::AccountService;
pub use auth_service::AuthService;
pub use invite_service::InviteService;
pub use link_service::LinkService;
pub use signup_service::SignupService;
