#![allow(dead_code)]

use posts_api::models::Post;
use posts_api::store::{PostStore, SharedStore};
use serde_json::Value;
use warp::http::Response;

/// A store holding the two sample posts, shared with the routes under test
pub fn seeded_store() -> SharedStore {
    PostStore::seeded().into_shared()
}

/// A store holding exactly `posts`
pub fn store_with(posts: &[(u64, &str, &str)]) -> SharedStore {
    PostStore::with_posts(
        posts
            .iter()
            .map(|(id, title, content)| Post {
                id: *id,
                title: title.to_string(),
                content: content.to_string(),
            })
            .collect(),
    )
    .into_shared()
}

/// Parse a reply body as JSON
pub fn json_body<B: AsRef<[u8]>>(res: &Response<B>) -> Value {
    serde_json::from_slice(res.body().as_ref()).expect("response body should be JSON")
}

/// Parse a reply body as a list of posts
pub fn posts_body<B: AsRef<[u8]>>(res: &Response<B>) -> Vec<Post> {
    serde_json::from_slice(res.body().as_ref()).expect("response body should be a post array")
}

pub fn titles(posts: &[Post]) -> Vec<&str> {
    posts.iter().map(|p| p.title.as_str()).collect()
}

pub fn ids(posts: &[Post]) -> Vec<u64> {
    posts.iter().map(|p| p.id).collect()
}
