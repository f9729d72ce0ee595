//! Todo Patch
//!
//! The only fields an update may touch. Owner and id are not representable
//! here.

use crate::domain::value_object::todo_text::TodoText;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<TodoText>,
    pub completed: Option<bool>,
}
