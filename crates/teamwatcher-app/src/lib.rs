pub mod app;
pub mod config;
pub mod error;
pub mod feed_handler;
