use std::collections::HashMap;

use sqlx::SqlitePool;

use crate::models::{
    AnnotatedPost, CommentWithAuthor, PostWithAuthor, PostWithLikeCount, Tag, TagWithPostCount,
};
use crate::Result;

/// Posts joined with their author, most liked first.
pub async fn popular_posts(pool: &SqlitePool, limit: i64) -> Result<Vec<PostWithAuthor>> {
    let posts = sqlx::query_as::<_, PostWithAuthor>(
        "SELECT p.id, p.title, p.text, a.username AS author_username, \
                p.published_at, p.image_url, p.slug \
         FROM posts p \
         JOIN authors a ON a.id = p.author_id \
         LEFT JOIN likes l ON l.post_id = p.id \
         GROUP BY p.id \
         ORDER BY COUNT(l.id) DESC \
         LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// All posts in ascending publication order. The fresh-posts window is the
/// tail of this list, not the head of a descending one.
pub async fn posts_by_published_at(pool: &SqlitePool) -> Result<Vec<PostWithAuthor>> {
    let posts = sqlx::query_as::<_, PostWithAuthor>(
        "SELECT p.id, p.title, p.text, a.username AS author_username, \
                p.published_at, p.image_url, p.slug \
         FROM posts p \
         JOIN authors a ON a.id = p.author_id \
         ORDER BY p.published_at",
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Posts carrying the given tag, in attachment order.
pub async fn posts_for_tag(
    pool: &SqlitePool,
    tag_id: i64,
    limit: i64,
) -> Result<Vec<PostWithAuthor>> {
    let posts = sqlx::query_as::<_, PostWithAuthor>(
        "SELECT p.id, p.title, p.text, a.username AS author_username, \
                p.published_at, p.image_url, p.slug \
         FROM posts p \
         JOIN authors a ON a.id = p.author_id \
         JOIN post_tags pt ON pt.post_id = p.id \
         WHERE pt.tag_id = ? \
         ORDER BY pt.id \
         LIMIT ?",
    )
    .bind(tag_id)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// One post looked up by slug, annotated with its like count.
pub async fn post_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<PostWithLikeCount>> {
    let post = sqlx::query_as::<_, PostWithLikeCount>(
        "SELECT p.id, p.title, p.text, a.username AS author_username, \
                p.published_at, p.image_url, p.slug, \
                COUNT(l.id) AS likes_count \
         FROM posts p \
         JOIN authors a ON a.id = p.author_id \
         LEFT JOIN likes l ON l.post_id = p.id \
         WHERE p.slug = ? \
         GROUP BY p.id",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

pub async fn tag_by_title(pool: &SqlitePool, title: &str) -> Result<Option<Tag>> {
    let tag = sqlx::query_as::<_, Tag>("SELECT id, title FROM tags WHERE title = ?")
        .bind(title)
        .fetch_optional(pool)
        .await?;

    Ok(tag)
}

/// Tags annotated with how many posts carry them, most used first.
pub async fn popular_tags(pool: &SqlitePool, limit: i64) -> Result<Vec<TagWithPostCount>> {
    let tags = sqlx::query_as::<_, TagWithPostCount>(
        "SELECT t.id, t.title, COUNT(pt.post_id) AS posts_with_tag \
         FROM tags t \
         LEFT JOIN post_tags pt ON pt.tag_id = t.id \
         GROUP BY t.id \
         ORDER BY posts_with_tag DESC \
         LIMIT ?",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(tags)
}

pub async fn comments_for_post(pool: &SqlitePool, post_id: i64) -> Result<Vec<CommentWithAuthor>> {
    let comments = sqlx::query_as::<_, CommentWithAuthor>(
        "SELECT c.text, c.published_at, a.username AS author_username \
         FROM comments c \
         JOIN authors a ON a.id = c.author_id \
         WHERE c.post_id = ? \
         ORDER BY c.published_at",
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

#[derive(sqlx::FromRow)]
struct CommentTally {
    post_id: i64,
    comments_count: i64,
}

/// Comment counts for a set of posts in one grouped query. Posts without
/// comments are absent from the map.
pub async fn comment_counts_for_posts(
    pool: &SqlitePool,
    post_ids: &[i64],
) -> Result<HashMap<i64, i64>> {
    if post_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let sql = format!(
        "SELECT post_id, COUNT(id) AS comments_count \
         FROM comments \
         WHERE post_id IN ({}) \
         GROUP BY post_id",
        placeholders(post_ids.len()),
    );

    let mut query = sqlx::query_as::<_, CommentTally>(&sql);
    for &id in post_ids {
        query = query.bind(id);
    }
    let tallies = query.fetch_all(pool).await?;

    Ok(tallies
        .into_iter()
        .map(|tally| (tally.post_id, tally.comments_count))
        .collect())
}

#[derive(sqlx::FromRow)]
struct TaggedRow {
    post_id: i64,
    id: i64,
    title: String,
    posts_with_tag: i64,
}

/// Tag lists for a set of posts in one batched query. Each tag carries its
/// global tagged-post count; per-post order is attachment order.
pub async fn tags_for_posts(
    pool: &SqlitePool,
    post_ids: &[i64],
) -> Result<HashMap<i64, Vec<TagWithPostCount>>> {
    if post_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let sql = format!(
        "SELECT pt.post_id, t.id, t.title, counted.posts_with_tag \
         FROM post_tags pt \
         JOIN tags t ON t.id = pt.tag_id \
         JOIN (SELECT tag_id, COUNT(post_id) AS posts_with_tag \
               FROM post_tags GROUP BY tag_id) counted ON counted.tag_id = t.id \
         WHERE pt.post_id IN ({}) \
         ORDER BY pt.post_id, pt.id",
        placeholders(post_ids.len()),
    );

    let mut query = sqlx::query_as::<_, TaggedRow>(&sql);
    for &id in post_ids {
        query = query.bind(id);
    }
    let rows = query.fetch_all(pool).await?;

    let mut by_post: HashMap<i64, Vec<TagWithPostCount>> = HashMap::new();
    for row in rows {
        by_post.entry(row.post_id).or_default().push(TagWithPostCount {
            id: row.id,
            title: row.title,
            posts_with_tag: row.posts_with_tag,
        });
    }

    Ok(by_post)
}

pub async fn tags_for_post(pool: &SqlitePool, post_id: i64) -> Result<Vec<TagWithPostCount>> {
    let mut by_post = tags_for_posts(pool, &[post_id]).await?;
    Ok(by_post.remove(&post_id).unwrap_or_default())
}

/// Attaches comment counts and tag lists to already-windowed posts. Two
/// batched queries regardless of how many posts are given.
pub async fn with_comment_counts_and_tags(
    pool: &SqlitePool,
    posts: Vec<PostWithAuthor>,
) -> Result<Vec<AnnotatedPost>> {
    let ids: Vec<i64> = posts.iter().map(|post| post.id).collect();
    let mut counts = comment_counts_for_posts(pool, &ids).await?;
    let mut tags = tags_for_posts(pool, &ids).await?;

    Ok(posts
        .into_iter()
        .map(|post| AnnotatedPost {
            comments_count: counts.remove(&post.id).unwrap_or(0),
            tags: tags.remove(&post.id).unwrap_or_default(),
            post,
        })
        .collect())
}

/// The last `n` elements of `items`, in their original order.
pub fn last_n<T>(mut items: Vec<T>, n: usize) -> Vec<T> {
    let start = items.len().saturating_sub(n);
    items.split_off(start)
}

fn placeholders(count: usize) -> String {
    vec!["?"; count].join(", ")
}
