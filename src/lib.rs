// HTTP Server modules
pub mod handlers;
pub mod models;
pub mod routes;

// Post collection
pub mod store;

pub mod config;
pub mod error;
