// PUT /api/posts/{id} handler

use tracing::info;
use warp::http::StatusCode;

use crate::models::UpdatePost;
use crate::store::SharedStore;

pub async fn update_post_handler(
    id: u64,
    request: UpdatePost,
    store: SharedStore,
) -> Result<impl warp::Reply, warp::Rejection> {
    let post = store.write().await.update(id, request)?;

    info!(id, "PUT /api/posts/{}: updated", id);

    Ok(warp::reply::with_status(
        warp::reply::json(&post),
        StatusCode::OK,
    ))
}
