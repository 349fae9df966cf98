//! Short link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A shortened URL owned by an account.
///
/// Maps a globally unique short code to an arbitrary absolute target URL.
/// `is_custom` records whether the code was caller-supplied rather than
/// generated; the record is immutable after creation apart from deletion by
/// its owner.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub owner_id: i64,
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        code: String,
        target_url: String,
        owner_id: i64,
        is_custom: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            target_url,
            owner_id,
            is_custom,
            created_at,
        }
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub target_url: String,
    pub owner_id: i64,
    pub is_custom: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_creation() {
        let now = Utc::now();
        let link = ShortLink::new(
            1,
            "Ab3x9".to_string(),
            "https://example.com".to_string(),
            42,
            false,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "Ab3x9");
        assert_eq!(link.target_url, "https://example.com");
        assert_eq!(link.owner_id, 42);
        assert!(!link.is_custom);
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_short_link_custom_flag() {
        let new_link = NewShortLink {
            code: "my-code".to_string(),
            target_url: "https://rust-lang.org".to_string(),
            owner_id: 7,
            is_custom: true,
        };

        assert_eq!(new_link.code, "my-code");
        assert!(new_link.is_custom);
    }
}
