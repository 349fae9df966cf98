//! PostgreSQL repository implementations.

pub mod pg_account_repository;
pub mod pg_invite_repository;
pub mod pg_short_link_repository;
pub mod pg_token_repository;

pub use pg_account_repository::PgAccountRepository;
pub use pg_invite_repository::PgInviteRepository;
pub use pg_short_link_repository::PgShortLinkRepository;
pub use pg_token_repository::PgTokenRepository;
