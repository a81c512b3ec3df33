// GET /api/posts handler

use tracing::debug;
use warp::http::StatusCode;

use crate::models::ListQuery;
use crate::store::SharedStore;

pub async fn list_posts_handler(
    query: ListQuery,
    store: SharedStore,
) -> Result<impl warp::Reply, warp::Rejection> {
    let (field, direction) = query.parse()?;

    // A sorted listing reorders the stored collection, not just the reply.
    let posts = match field {
        Some(field) => {
            let mut store = store.write().await;
            store.sort(field, direction);
            store.all().to_vec()
        }
        None => store.read().await.all().to_vec(),
    };

    debug!(count = posts.len(), ?field, ?direction, "GET /api/posts");

    Ok(warp::reply::with_status(
        warp::reply::json(&posts),
        StatusCode::OK,
    ))
}
