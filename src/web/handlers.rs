use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

use crate::serialize::{
    serialize_post, serialize_post_detail, serialize_tag, SerializedPost, SerializedPostDetail,
    SerializedTag,
};
use crate::{queries, Error, Result};

use super::AppState;

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    most_popular_posts: Vec<SerializedPost>,
    page_posts: Vec<SerializedPost>,
    popular_tags: Vec<SerializedTag>,
}

#[derive(Template)]
#[template(path = "post-details.html")]
struct PostDetailTemplate {
    post: SerializedPostDetail,
    popular_tags: Vec<SerializedTag>,
    most_popular_posts: Vec<SerializedPost>,
}

#[derive(Template)]
#[template(path = "posts-list.html")]
struct TagFilterTemplate {
    tag: String,
    popular_tags: Vec<SerializedTag>,
    posts: Vec<SerializedPost>,
    most_popular_posts: Vec<SerializedPost>,
}

#[derive(Template)]
#[template(path = "contacts.html")]
pub struct ContactsTemplate;

pub async fn index(State(state): State<Arc<AppState>>) -> Result<Response> {
    let most_popular_posts = queries::popular_posts(&state.db, 5).await?;
    let most_popular_posts =
        queries::with_comment_counts_and_tags(&state.db, most_popular_posts).await?;

    let fresh_posts = queries::posts_by_published_at(&state.db).await?;
    let most_fresh_posts = queries::last_n(fresh_posts, 5);
    let most_fresh_posts =
        queries::with_comment_counts_and_tags(&state.db, most_fresh_posts).await?;

    let most_popular_tags = queries::popular_tags(&state.db, 5).await?;

    let template = IndexTemplate {
        most_popular_posts: most_popular_posts.iter().map(serialize_post).collect(),
        page_posts: most_fresh_posts.iter().map(serialize_post).collect(),
        popular_tags: most_popular_tags.iter().map(serialize_tag).collect(),
    };
    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template error: {}", e))
    })?)
    .into_response())
}

pub async fn post_detail(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Response> {
    let post = queries::post_by_slug(&state.db, &slug)
        .await?
        .ok_or_else(|| Error::NotFound("Post does not exist, sorry".to_string()))?;

    let comments = queries::comments_for_post(&state.db, post.id).await?;
    let related_tags = queries::tags_for_post(&state.db, post.id).await?;
    let serialized_post = serialize_post_detail(&post, &related_tags, &comments);

    let most_popular_tags = queries::popular_tags(&state.db, 5).await?;

    let most_popular_posts = queries::popular_posts(&state.db, 5).await?;
    let most_popular_posts =
        queries::with_comment_counts_and_tags(&state.db, most_popular_posts).await?;

    let template = PostDetailTemplate {
        post: serialized_post,
        popular_tags: most_popular_tags.iter().map(serialize_tag).collect(),
        most_popular_posts: most_popular_posts.iter().map(serialize_post).collect(),
    };
    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template error: {}", e))
    })?)
    .into_response())
}

pub async fn tag_filter(
    State(state): State<Arc<AppState>>,
    Path(title): Path<String>,
) -> Result<Response> {
    let tag = queries::tag_by_title(&state.db, &title)
        .await?
        .ok_or_else(|| Error::NotFound("Tag does not exist, sorry".to_string()))?;

    let most_popular_tags = queries::popular_tags(&state.db, 5).await?;

    let most_popular_posts = queries::popular_posts(&state.db, 5).await?;
    let most_popular_posts =
        queries::with_comment_counts_and_tags(&state.db, most_popular_posts).await?;

    let related_posts = queries::posts_for_tag(&state.db, tag.id, 20).await?;
    let related_posts = queries::with_comment_counts_and_tags(&state.db, related_posts).await?;

    let template = TagFilterTemplate {
        tag: tag.title,
        popular_tags: most_popular_tags.iter().map(serialize_tag).collect(),
        posts: related_posts.iter().map(serialize_post).collect(),
        most_popular_posts: most_popular_posts.iter().map(serialize_post).collect(),
    };
    Ok(Html(template.render().map_err(|e| {
        Error::Internal(format!("Template error: {}", e))
    })?)
    .into_response())
}

pub async fn contacts() -> ContactsTemplate {
    // TODO: record page visits and accept feedback once storage for them exists
    ContactsTemplate
}

pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
