//! List Todos Use Case

use std::sync::Arc;

use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::domain::value_object::UserId;
use crate::error::TodoResult;

pub struct ListTodosUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> ListTodosUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, owner_id: UserId) -> TodoResult<Vec<Todo>> {
        self.repo.list_by_owner(owner_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::todo_text::TodoText;
    use crate::infra::memory::InMemoryTodoRepository;

    #[tokio::test]
    async fn test_list_only_returns_own_todos_in_order() {
        let repo = Arc::new(InMemoryTodoRepository::new());
        let alice = UserId::new();
        let bob = UserId::new();

        let first = Todo::new(alice, TodoText::new("first").unwrap(), false);
        let theirs = Todo::new(bob, TodoText::new("bob's").unwrap(), false);
        let second = Todo::new(alice, TodoText::new("second").unwrap(), true);
        for todo in [&first, &theirs, &second] {
            repo.create(todo).await.unwrap();
        }

        let use_case = ListTodosUseCase::new(repo);
        assert_eq!(use_case.execute(alice).await.unwrap(), vec![first, second]);
        assert_eq!(use_case.execute(bob).await.unwrap(), vec![theirs]);
        assert!(use_case.execute(UserId::new()).await.unwrap().is_empty());
    }
}
