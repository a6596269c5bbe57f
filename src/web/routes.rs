use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use super::{handlers, AppState};

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/posts/:slug/", get(handlers::post_detail))
        .route("/tags/:title/", get(handlers::tag_filter))
        .route("/contacts/", get(handlers::contacts))
        .route("/health", get(handlers::health))
}
