//! DTOs for link listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single link in a listing response.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: i64,
    pub code: String,
    pub short_url: String,
    pub target_url: String,
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
}

/// Response containing the caller's links.
#[derive(Debug, Serialize)]
pub struct LinkListResponse {
    pub links: Vec<LinkItem>,
}
