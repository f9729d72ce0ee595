//! Todo Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::{TodoId, UserId, todo_patch::TodoPatch, todo_text::TodoText};

/// A single task owned by exactly one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub todo_id: TodoId,
    /// Fixed at creation; no operation reassigns it
    pub owner_id: UserId,
    pub text: TodoText,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(owner_id: UserId, text: TodoText, completed: bool) -> Self {
        let now = Utc::now();
        Self {
            todo_id: TodoId::new(),
            owner_id,
            text,
            completed,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge `text` and `completed` from a patch; identity and owner stay put
    pub fn apply(&mut self, patch: &TodoPatch) {
        if let Some(text) = &patch.text {
            self.text = text.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        self.updated_at = Utc::now();
    }
}
