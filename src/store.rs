//! In-memory post collection.
//!
//! [`PostStore`] owns the ordered sequence of posts and is the only place
//! that assigns ids, reorders, or mutates it. Handlers share one store
//! through [`SharedStore`].

use std::cmp::Reverse;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::ApiError;
use crate::models::{NewPost, Post, SearchQuery, SortDirection, SortField, UpdatePost};

/// Store handle shared by every request.
pub type SharedStore = Arc<RwLock<PostStore>>;

/// Ordered collection of posts.
///
/// Ids are allocated from a high-water mark: the largest id the store has
/// ever held. Deleting the newest post therefore never frees its id.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: Vec<Post>,
    high_water: u64,
}

impl PostStore {
    /// Create an empty store. The first post created gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `posts` in the given order.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let high_water = posts.iter().map(|p| p.id).max().unwrap_or(0);
        Self { posts, high_water }
    }

    /// The two posts the service starts with.
    pub fn seeded() -> Self {
        Self::with_posts(vec![
            Post {
                id: 1,
                title: "First post".to_string(),
                content: "This is the first post.".to_string(),
            },
            Post {
                id: 2,
                title: "Second post".to_string(),
                content: "This is the second post.".to_string(),
            },
        ])
    }

    /// Wrap the store for sharing across request handlers.
    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// All posts in their current order.
    pub fn all(&self) -> &[Post] {
        &self.posts
    }

    /// Reorder the collection in place by the case-folded value of `field`.
    ///
    /// Stable in both directions: posts with equal keys keep their relative
    /// order, so descending is not simply the reverse of ascending when
    /// keys tie.
    pub fn sort(&mut self, field: SortField, direction: SortDirection) {
        match direction {
            SortDirection::Asc => self.posts.sort_by_cached_key(|p| field.key(p)),
            SortDirection::Desc => self
                .posts
                .sort_by_cached_key(|p| Reverse(field.key(p))),
        }
    }

    /// Validate `new_post`, assign the next id, and append it.
    pub fn create(&mut self, new_post: NewPost) -> Result<Post, ApiError> {
        let (title, content) = match (new_post.title, new_post.content) {
            (Some(title), Some(content)) => (title, content),
            _ => {
                return Err(ApiError::Validation(
                    "title or content are missing".to_string(),
                ))
            }
        };

        let post = Post {
            id: self.next_id(),
            title,
            content,
        };
        self.high_water = post.id;
        self.posts.push(post.clone());
        Ok(post)
    }

    pub fn find(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn find_mut(&mut self, id: u64) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    /// Apply the supplied fields of `changes` to post `id`.
    pub fn update(&mut self, id: u64, changes: UpdatePost) -> Result<Post, ApiError> {
        let post = self.find_mut(id).ok_or(ApiError::NotFound(id))?;
        if let Some(title) = changes.title {
            post.title = title;
        }
        if let Some(content) = changes.content {
            post.content = content;
        }
        Ok(post.clone())
    }

    /// Remove post `id`, returning it.
    pub fn delete(&mut self, id: u64) -> Result<Post, ApiError> {
        let index = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(ApiError::NotFound(id))?;
        Ok(self.posts.remove(index))
    }

    /// Posts matching any supplied needle, in collection order.
    pub fn search(&self, query: &SearchQuery) -> Vec<Post> {
        let title = query.title_needle();
        let content = query.content_needle();

        if title.is_none() && content.is_none() {
            return self.posts.clone();
        }

        self.posts
            .iter()
            .filter(|post| {
                let title_match = title
                    .as_deref()
                    .is_some_and(|needle| post.title.to_lowercase().contains(needle));
                let content_match = content
                    .as_deref()
                    .is_some_and(|needle| post.content.to_lowercase().contains(needle));
                title_match || content_match
            })
            .cloned()
            .collect()
    }

    fn next_id(&self) -> u64 {
        self.high_water + 1
    }
}
