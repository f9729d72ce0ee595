//! Todo Crate
//!
//! Owner-scoped task storage and the authenticated `/todos` HTTP surface.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use domain::repository::TodoRepository;
pub use error::{TodoError, TodoResult};
pub use infra::{memory::InMemoryTodoRepository, postgres::PgTodoRepository};
pub use presentation::router::todo_router;
