pub mod config;
pub mod content;
pub mod display;
pub mod error;
pub mod guidance;
pub mod handlers;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod schema;
pub mod screens;
pub mod version;
pub mod views;
