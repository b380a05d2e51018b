pub mod api;
pub mod config;
pub mod errors;
pub mod phase;
pub mod submit;
pub mod tracker;
pub mod ui;
