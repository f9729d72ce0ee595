//! Presentation Layer
//!
//! HTTP handlers, DTOs and the authenticated `/todos` router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::TodoAppState;
pub use router::todo_router;
