//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation inputs
//! use separate `New*` structs so repositories can attach database-assigned
//! fields (ids, timestamps) in a single insert.

pub mod account;
pub mod invite;
pub mod short_link;

pub use account::{Account, ApiToken, NewAccount};
pub use invite::{Invite, NewInvite};
pub use short_link::{NewShortLink, ShortLink};
