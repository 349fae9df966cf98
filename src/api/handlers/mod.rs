//! HTTP request handlers.

pub mod health;
pub mod invites;
pub mod links;
pub mod redirect;
pub mod shorten;
pub mod signup;
pub mod users;

pub use health::health_handler;
pub use invites::{create_invite_handler, delete_invite_handler, list_invites_handler};
pub use links::{delete_link_handler, list_links_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use signup::signup_handler;
pub use users::{delete_user_handler, list_users_handler};
