pub mod todo_patch;
pub mod todo_text;

pub use kernel::id::{TodoId, UserId};
