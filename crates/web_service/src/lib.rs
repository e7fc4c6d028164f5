pub mod controllers;
pub mod error;
pub mod middleware;
pub mod models;
pub mod server;
pub mod services;

pub use error::ApiError;
pub use server::AppState;
