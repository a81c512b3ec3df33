// DELETE /api/posts/{id} handler

use tracing::info;
use warp::http::StatusCode;

use crate::store::SharedStore;

pub async fn delete_post_handler(
    id: u64,
    store: SharedStore,
) -> Result<impl warp::Reply, warp::Rejection> {
    let removed = store.write().await.delete(id)?;

    info!(id, title = %removed.title, "DELETE /api/posts/{}: deleted", id);

    let message = format!("Post with id {} has been deleted successfully.", id);
    Ok(warp::reply::with_status(
        warp::reply::json(&message),
        StatusCode::OK,
    ))
}
