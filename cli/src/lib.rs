pub mod app;
pub mod args;
pub mod listing;
pub mod render;
