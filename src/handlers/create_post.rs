// POST /api/posts handler

use tracing::info;
use warp::http::StatusCode;

use crate::models::NewPost;
use crate::store::SharedStore;

pub async fn create_post_handler(
    request: NewPost,
    store: SharedStore,
) -> Result<impl warp::Reply, warp::Rejection> {
    let post = store.write().await.create(request)?;

    info!(id = post.id, title = %post.title, "POST /api/posts: created");

    Ok(warp::reply::with_status(
        warp::reply::json(&post),
        StatusCode::CREATED,
    ))
}
