//! Translation between persisted entities and transfer views
//!
//! Pure data shaping, no I/O. Every read crosses entity -> view here, and
//! every creation crosses view -> entity here, so the two directions cannot
//! drift apart.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::models::{Tweet, TweetWithAuthor, User};
use crate::domain::views::{NewTweet, TweetView};

/// Stateless translator between storage entities and `TweetView`
#[derive(Debug, Clone, Default)]
pub struct TweetMapper;

impl TweetMapper {
    pub fn new() -> Self {
        Self
    }

    /// Shape a tweet and its author into the transfer view
    pub fn to_view(&self, tweet: &Tweet, author: &User) -> TweetView {
        TweetView {
            id: tweet.id,
            author_id: tweet.author_id,
            content: tweet.content.clone(),
            created_at: tweet.created_at,
            author_username: author.username.clone(),
            author_display_name: author.display_name.clone(),
            author_avatar_url: author.avatar_url.clone(),
        }
    }

    /// Shape a joined read row into the transfer view
    pub fn join_to_view(&self, row: &TweetWithAuthor) -> TweetView {
        TweetView {
            id: row.id,
            author_id: row.author_id,
            content: row.content.clone(),
            created_at: row.created_at,
            author_username: row.author_username.clone(),
            author_display_name: row.author_display_name.clone(),
            author_avatar_url: row.author_avatar_url.clone(),
        }
    }

    /// Build the entity to persist. `id` and `created_at` are passed in by
    /// the repository; caller-supplied values for them never reach storage.
    /// Content is stored trimmed.
    pub fn to_entity(&self, input: &NewTweet, id: Uuid, created_at: DateTime<Utc>) -> Tweet {
        Tweet {
            id,
            author_id: input.author_id,
            content: input.content.trim().to_string(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_author() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            display_name: Some("Alice".to_string()),
            avatar_url: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_to_view_carries_author_display_data() {
        let mapper = TweetMapper::new();
        let author = test_author();
        let tweet = Tweet {
            id: Uuid::new_v4(),
            author_id: author.id,
            content: "hello world".to_string(),
            created_at: Utc::now(),
        };

        let view = mapper.to_view(&tweet, &author);

        assert_eq!(view.id, tweet.id);
        assert_eq!(view.author_id, author.id);
        assert_eq!(view.content, "hello world");
        assert_eq!(view.created_at, tweet.created_at);
        assert_eq!(view.author_username, "alice");
        assert_eq!(view.author_display_name.as_deref(), Some("Alice"));
        assert_eq!(view.author_avatar_url, None);
    }

    #[test]
    fn test_join_to_view_matches_to_view() {
        let mapper = TweetMapper::new();
        let author = test_author();
        let tweet = Tweet {
            id: Uuid::new_v4(),
            author_id: author.id,
            content: "same shape either way".to_string(),
            created_at: Utc::now(),
        };
        let row = TweetWithAuthor {
            id: tweet.id,
            author_id: tweet.author_id,
            content: tweet.content.clone(),
            created_at: tweet.created_at,
            author_username: author.username.clone(),
            author_display_name: author.display_name.clone(),
            author_avatar_url: author.avatar_url.clone(),
        };

        assert_eq!(mapper.join_to_view(&row), mapper.to_view(&tweet, &author));
    }

    #[test]
    fn test_to_entity_uses_server_assigned_fields() {
        let mapper = TweetMapper::new();
        let input = NewTweet {
            author_id: Uuid::new_v4(),
            content: "fresh tweet".to_string(),
        };
        let id = Uuid::new_v4();
        let now = Utc::now();

        let entity = mapper.to_entity(&input, id, now);

        assert_eq!(entity.id, id);
        assert_eq!(entity.created_at, now);
        assert_eq!(entity.author_id, input.author_id);
        assert_eq!(entity.content, "fresh tweet");
    }

    #[test]
    fn test_to_entity_trims_content() {
        let mapper = TweetMapper::new();
        let input = NewTweet {
            author_id: Uuid::new_v4(),
            content: "  padded  ".to_string(),
        };

        let entity = mapper.to_entity(&input, Uuid::new_v4(), Utc::now());

        assert_eq!(entity.content, "padded");
    }
}
