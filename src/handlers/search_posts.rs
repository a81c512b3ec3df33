// GET /api/posts/search handler

use std::convert::Infallible;

use tracing::debug;
use warp::http::StatusCode;

use crate::models::SearchQuery;
use crate::store::SharedStore;

pub async fn search_posts_handler(
    query: SearchQuery,
    store: SharedStore,
) -> Result<impl warp::Reply, Infallible> {
    let matches = store.read().await.search(&query);

    debug!(
        title = ?query.title,
        content = ?query.content,
        count = matches.len(),
        "GET /api/posts/search"
    );

    Ok(warp::reply::with_status(
        warp::reply::json(&matches),
        StatusCode::OK,
    ))
}
