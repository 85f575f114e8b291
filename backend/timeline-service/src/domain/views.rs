use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Input for creating a tweet. `id` and `created_at` are server-assigned;
/// nothing a caller supplies for them reaches storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTweet {
    pub author_id: Uuid,
    pub content: String,
}

/// Denormalized transfer shape returned at every read boundary: a tweet plus
/// its author's display data. Produced by the mapper, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweetView {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_username: String,
    pub author_display_name: Option<String>,
    pub author_avatar_url: Option<String>,
}
