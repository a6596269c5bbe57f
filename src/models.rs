use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TagWithPostCount {
    pub id: i64,
    pub title: String,
    pub posts_with_tag: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostWithAuthor {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub author_username: String,
    pub published_at: DateTime<Utc>,
    pub image_url: Option<String>,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostWithLikeCount {
    pub id: i64,
    pub title: String,
    pub text: String,
    pub author_username: String,
    pub published_at: DateTime<Utc>,
    pub image_url: Option<String>,
    pub slug: String,
    pub likes_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommentWithAuthor {
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub author_username: String,
}

/// A post with its storage-computed comment count and tag list attached.
#[derive(Debug, Clone, Serialize)]
pub struct AnnotatedPost {
    pub post: PostWithAuthor,
    pub comments_count: i64,
    pub tags: Vec<TagWithPostCount>,
}
