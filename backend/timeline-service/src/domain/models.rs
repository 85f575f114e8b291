use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity - account referenced by tweets and follow edges.
/// Read-only from the tweet core; the write path lives in the identity layer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Tweet entity - a single authored, timestamped short message.
/// Immutable after creation except for deletion.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tweet {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Tweet row joined with its author's display data, as returned by read
/// queries. Never crosses the repository boundary; the mapper shapes it
/// into a `TweetView` first.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TweetWithAuthor {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_username: String,
    pub author_display_name: Option<String>,
    pub author_avatar_url: Option<String>,
}
