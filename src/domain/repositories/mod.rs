//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; concrete implementations
//! live in `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod account_repository;
pub mod invite_repository;
pub mod short_link_repository;
pub mod token_repository;

pub use account_repository::AccountRepository;
pub use invite_repository::InviteRepository;
pub use short_link_repository::ShortLinkRepository;
pub use token_repository::TokenRepository;

#[cfg(test)]
pub use account_repository::MockAccountRepository;
#[cfg(test)]
pub use invite_repository::MockInviteRepository;
#[cfg(test)]
pub use short_link_repository::MockShortLinkRepository;
#[cfg(test)]
pub use token_repository::MockTokenRepository;
