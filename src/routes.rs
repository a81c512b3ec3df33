// Route definitions

use std::convert::Infallible;

use warp::http::Method;
use warp::Filter;

use crate::error::handle_rejection;
use crate::handlers;
use crate::models::{ListQuery, SearchQuery};
use crate::store::SharedStore;

/// The complete API: every `/api/posts` route with rejection recovery,
/// permissive CORS and per-request tracing spans.
///
/// The only rejections left are CORS refusals, which warp answers itself.
pub fn configure_routes(
    store: SharedStore,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let cors = warp::cors()
        .allow_any_origin()
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(vec!["content-type"]);

    post_routes(store)
        .recover(handle_rejection)
        .with(cors)
        .with(warp::trace::request())
}

/// The `/api/posts` routes without recovery or CORS.
pub fn post_routes(
    store: SharedStore,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let posts = warp::path("api").and(warp::path("posts"));

    // GET /api/posts/search
    let search_posts = posts
        .and(warp::path("search"))
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<SearchQuery>())
        .and(with_store(store.clone()))
        .and_then(handlers::search_posts_handler);

    // GET /api/posts
    let list_posts = posts
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<ListQuery>())
        .and(with_store(store.clone()))
        .and_then(handlers::list_posts_handler);

    // POST /api/posts
    let create_post = posts
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::create_post_handler);

    // PUT /api/posts/{id}
    let update_post = posts
        .and(warp::path::param::<u64>())
        .and(warp::path::end())
        .and(warp::put())
        .and(warp::body::json())
        .and(with_store(store.clone()))
        .and_then(handlers::update_post_handler);

    // DELETE /api/posts/{id}
    let delete_post = posts
        .and(warp::path::param::<u64>())
        .and(warp::path::end())
        .and(warp::delete())
        .and(with_store(store))
        .and_then(handlers::delete_post_handler);

    // Combine routes
    search_posts
        .or(list_posts)
        .or(create_post)
        .or(update_post)
        .or(delete_post)
}

fn with_store(
    store: SharedStore,
) -> impl Filter<Extract = (SharedStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}
