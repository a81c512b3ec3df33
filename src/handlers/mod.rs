// Handlers module

pub mod create_post;
pub mod delete_post;
pub mod list_posts;
pub mod search_posts;
pub mod update_post;

pub use create_post::create_post_handler;
pub use delete_post::delete_post_handler;
pub use list_posts::list_posts_handler;
pub use search_posts::search_posts_handler;
pub use update_post::update_post_handler;
