//! Request and response data transfer objects.

pub mod health;
pub mod invites;
pub mod links;
pub mod shorten;
pub mod signup;
pub mod users;
