//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for custom code validation.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The URL to shorten. Must parse as an absolute URL; any scheme is
    /// accepted.
    #[validate(url(message = "Invalid URL"))]
    pub url: String,

    /// Optional custom short code (3-20 characters, letters, digits,
    /// hyphens, underscores).
    #[validate(length(min = 3, max = 20, message = "Custom code must be 3-20 characters"))]
    #[validate(regex(
        path = "*CUSTOM_CODE_REGEX",
        message = "Custom code can only contain letters, numbers, hyphens, and underscores"
    ))]
    pub custom_code: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub id: i64,
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
}
