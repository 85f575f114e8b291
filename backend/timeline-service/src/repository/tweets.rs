//! Tweet repository - CRUD and feed composition against PostgreSQL
//!
//! Sole gateway between the tweet domain and the store. Writes enforce
//! referential validity before any mutation is attempted; every read is
//! shaped into `TweetView` through the mapper. Author validity is enforced
//! here by an existence check, not by a storage constraint.

use chrono::Utc;
use sqlx::PgPool;
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::models::{Tweet, TweetWithAuthor, User};
use crate::domain::views::{NewTweet, TweetView};
use crate::error::{ServiceError, ServiceResult};
use crate::mappers::TweetMapper;

/// Maximum tweet length in characters
pub const MAX_TWEET_CHARS: usize = 280;

/// Repository for tweet operations
#[derive(Clone)]
pub struct TweetRepository {
    pool: PgPool,
    mapper: TweetMapper,
}

impl TweetRepository {
    pub fn new(pool: PgPool, mapper: TweetMapper) -> Self {
        Self { pool, mapper }
    }

    /// Create a new tweet authored by an existing user.
    ///
    /// The author existence check and content validation run before the
    /// insert, so a rejected call writes nothing. Id and creation timestamp
    /// are assigned here.
    pub async fn create_tweet(&self, input: NewTweet) -> ServiceResult<TweetView> {
        let content = input.content.trim();
        if content.is_empty() {
            return Err(ServiceError::Validation(
                "tweet content must not be empty".to_string(),
            ));
        }
        if content.chars().count() > MAX_TWEET_CHARS {
            return Err(ServiceError::Validation(format!(
                "tweet content exceeds {} characters",
                MAX_TWEET_CHARS
            )));
        }

        let author = self.find_author(input.author_id).await?.ok_or_else(|| {
            warn!(author_id = %input.author_id, "create_tweet rejected: author does not exist");
            ServiceError::Validation(format!("author {} does not exist", input.author_id))
        })?;

        let entity = self.mapper.to_entity(&input, Uuid::new_v4(), Utc::now());

        let tweet = sqlx::query_as::<_, Tweet>(
            r#"
            INSERT INTO tweets (id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, author_id, content, created_at
            "#,
        )
        .bind(entity.id)
        .bind(entity.author_id)
        .bind(&entity.content)
        .bind(entity.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(author_id = %input.author_id, "create_tweet insert failed: {}", e);
            ServiceError::from(e)
        })?;

        Ok(self.mapper.to_view(&tweet, &author))
    }

    /// Fetch a single tweet joined with its author.
    ///
    /// Absence is a normal outcome, expressed as `Ok(None)` rather than an
    /// error, so callers cannot mistake it for a store fault.
    pub async fn get_tweet_by_id(&self, id: Uuid) -> ServiceResult<Option<TweetView>> {
        let row = sqlx::query_as::<_, TweetWithAuthor>(
            r#"
            SELECT t.id, t.author_id, t.content, t.created_at,
                   u.username AS author_username,
                   u.display_name AS author_display_name,
                   u.avatar_url AS author_avatar_url
            FROM tweets t
            JOIN users u ON u.id = t.author_id
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(tweet_id = %id, "get_tweet_by_id query failed: {}", e);
            ServiceError::from(e)
        })?;

        Ok(row.map(|r| self.mapper.join_to_view(&r)))
    }

    /// Fetch every tweet joined with author data.
    ///
    /// The contract is unordered; the newest-first secondary sort is a
    /// determinism choice, not a guarantee callers may rely on. Unbounded
    /// result set, intended for small or administrative use.
    pub async fn get_all_tweets(&self) -> ServiceResult<Vec<TweetView>> {
        let rows = sqlx::query_as::<_, TweetWithAuthor>(
            r#"
            SELECT t.id, t.author_id, t.content, t.created_at,
                   u.username AS author_username,
                   u.display_name AS author_display_name,
                   u.avatar_url AS author_avatar_url
            FROM tweets t
            JOIN users u ON u.id = t.author_id
            ORDER BY t.created_at DESC, t.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("get_all_tweets query failed: {}", e);
            ServiceError::from(e)
        })?;

        Ok(rows.iter().map(|r| self.mapper.join_to_view(r)).collect())
    }

    /// Fetch all tweets authored by one user, joined with author data.
    /// Same unordered contract and determinism choice as `get_all_tweets`.
    pub async fn get_tweets_by_user_id(&self, author_id: Uuid) -> ServiceResult<Vec<TweetView>> {
        let rows = sqlx::query_as::<_, TweetWithAuthor>(
            r#"
            SELECT t.id, t.author_id, t.content, t.created_at,
                   u.username AS author_username,
                   u.display_name AS author_display_name,
                   u.avatar_url AS author_avatar_url
            FROM tweets t
            JOIN users u ON u.id = t.author_id
            WHERE t.author_id = $1
            ORDER BY t.created_at DESC, t.id DESC
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(author_id = %author_id, "get_tweets_by_user_id query failed: {}", e);
            ServiceError::from(e)
        })?;

        Ok(rows.iter().map(|r| self.mapper.join_to_view(r)).collect())
    }

    /// Compose the viewer's home feed: tweets authored by everyone the viewer
    /// follows, newest first, id descending on identical timestamps.
    ///
    /// The `IN` subquery resolves the followed-id set and deduplicates it by
    /// construction, so duplicate follow edges cannot duplicate tweets. A
    /// viewer who follows nobody gets an empty result, not an error.
    pub async fn get_tweets_by_following_users(
        &self,
        viewer_id: Uuid,
    ) -> ServiceResult<Vec<TweetView>> {
        let rows = sqlx::query_as::<_, TweetWithAuthor>(
            r#"
            SELECT t.id, t.author_id, t.content, t.created_at,
                   u.username AS author_username,
                   u.display_name AS author_display_name,
                   u.avatar_url AS author_avatar_url
            FROM tweets t
            JOIN users u ON u.id = t.author_id
            WHERE t.author_id IN (
                SELECT following_id FROM follows WHERE follower_id = $1
            )
            ORDER BY t.created_at DESC, t.id DESC
            "#,
        )
        .bind(viewer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(viewer_id = %viewer_id, "get_tweets_by_following_users query failed: {}", e);
            ServiceError::from(e)
        })?;

        Ok(rows.iter().map(|r| self.mapper.join_to_view(r)).collect())
    }

    /// Permanently delete a tweet.
    ///
    /// Missing ids fail with `NotFound` before any write is attempted. No
    /// ownership check happens at this layer; verifying the deleter is the
    /// author is the caller's responsibility.
    pub async fn delete_tweet(&self, id: Uuid) -> ServiceResult<()> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tweets WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(tweet_id = %id, "delete_tweet existence check failed: {}", e);
                ServiceError::from(e)
            })?;

        if !exists {
            warn!(tweet_id = %id, "delete_tweet rejected: tweet does not exist");
            return Err(ServiceError::NotFound(format!(
                "tweet {} does not exist",
                id
            )));
        }

        sqlx::query("DELETE FROM tweets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(tweet_id = %id, "delete_tweet failed: {}", e);
                ServiceError::from(e)
            })?;

        Ok(())
    }

    async fn find_author(&self, author_id: Uuid) -> ServiceResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, display_name, avatar_url, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(author_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(author_id = %author_id, "author lookup failed: {}", e);
            ServiceError::from(e)
        })
    }
}
