// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod sessions;
pub mod state;
pub mod store;
pub mod timing;
pub mod utils;
pub mod views;

pub use routes::create_router;
