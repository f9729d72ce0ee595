//! API Server
//!
//! Configuration and router assembly for the todo service binary.

pub mod app;
pub mod config;


// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
