use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{AnnotatedPost, CommentWithAuthor, PostWithLikeCount, TagWithPostCount};

/// List pages show this many characters of body text.
const TEASER_LEN: usize = 200;

#[derive(Debug, Clone, Serialize)]
pub struct SerializedTag {
    pub title: String,
    pub posts_with_tag: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SerializedPost {
    pub title: String,
    pub teaser_text: String,
    pub author: String,
    pub comments_amount: i64,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub slug: String,
    pub tags: Vec<SerializedTag>,
    pub first_tag_title: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SerializedComment {
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SerializedPostDetail {
    pub title: String,
    pub text: String,
    pub author: String,
    pub comments: Vec<SerializedComment>,
    pub likes_amount: i64,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub slug: String,
    pub tags: Vec<SerializedTag>,
}

pub fn serialize_tag(tag: &TagWithPostCount) -> SerializedTag {
    SerializedTag {
        title: tag.title.clone(),
        posts_with_tag: tag.posts_with_tag,
    }
}

pub fn serialize_post(post: &AnnotatedPost) -> SerializedPost {
    SerializedPost {
        title: post.post.title.clone(),
        teaser_text: teaser(&post.post.text),
        author: post.post.author_username.clone(),
        comments_amount: post.comments_count,
        image_url: post.post.image_url.clone(),
        published_at: post.post.published_at,
        slug: post.post.slug.clone(),
        tags: post.tags.iter().map(serialize_tag).collect(),
        first_tag_title: post.tags.first().map(|tag| tag.title.clone()),
    }
}

pub fn serialize_comment(comment: &CommentWithAuthor) -> SerializedComment {
    SerializedComment {
        text: comment.text.clone(),
        published_at: comment.published_at,
        author: comment.author_username.clone(),
    }
}

pub fn serialize_post_detail(
    post: &PostWithLikeCount,
    tags: &[TagWithPostCount],
    comments: &[CommentWithAuthor],
) -> SerializedPostDetail {
    SerializedPostDetail {
        title: post.title.clone(),
        text: post.text.clone(),
        author: post.author_username.clone(),
        comments: comments.iter().map(serialize_comment).collect(),
        likes_amount: post.likes_count,
        image_url: post.image_url.clone(),
        published_at: post.published_at,
        slug: post.slug.clone(),
        tags: tags.iter().map(serialize_tag).collect(),
    }
}

/// The first [`TEASER_LEN`] characters of the body. Counts characters, not
/// bytes, and appends no truncation marker.
fn teaser(text: &str) -> String {
    text.chars().take(TEASER_LEN).collect()
}
