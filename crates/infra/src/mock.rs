//! # テスト用モックリポジトリ
//!
//! ハンドラ・ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! taskhub-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use taskhub_domain::{
    todo::{Todo, TodoDescription, TodoId, TodoTitle},
    user::{User, UserId, UserName},
};

use crate::{
    error::InfraError,
    repository::{TodoRepository, UserRepository},
};

// ===== MockTodoRepository =====

/// インメモリ実装の TodoRepository
///
/// 挿入順を保持する `Vec` と連番カウンタでストアの採番を模倣する。
#[derive(Clone, Default)]
pub struct MockTodoRepository {
    todos:   Arc<Mutex<Vec<Todo>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self {
            todos:   Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(0)),
        }
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn find_all(&self, completed: Option<bool>) -> Result<Vec<Todo>, InfraError> {
        Ok(self
            .todos
            .lock()
            .unwrap()
            .iter()
            .filter(|t| completed.is_none_or(|flag| t.completed() == flag))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: TodoId) -> Result<Option<Todo>, InfraError> {
        Ok(self
            .todos
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn insert(
        &self,
        title: &TodoTitle,
        description: Option<&TodoDescription>,
        completed: bool,
    ) -> Result<Todo, InfraError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let todo = Todo::from_db(
            TodoId::from_i64(*next_id),
            title.clone(),
            description.cloned(),
            completed,
        );
        self.todos.lock().unwrap().push(todo.clone());

        Ok(todo)
    }

    async fn update(&self, todo: &Todo) -> Result<(), InfraError> {
        let mut todos = self.todos.lock().unwrap();
        if let Some(stored) = todos.iter_mut().find(|t| t.id() == todo.id()) {
            *stored = todo.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: TodoId) -> Result<bool, InfraError> {
        let mut todos = self.todos.lock().unwrap();
        let before = todos.len();
        todos.retain(|t| t.id() != id);
        Ok(todos.len() < before)
    }
}

// ===== MockUserRepository =====

/// インメモリ実装の UserRepository
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users:   Arc<Mutex<Vec<User>>>,
    next_id: Arc<Mutex<i64>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users:   Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(0)),
        }
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, InfraError> {
        Ok(self.users.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, InfraError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id() == id)
            .cloned())
    }

    async fn insert(&self, name: &UserName) -> Result<User, InfraError> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let user = User::from_db(UserId::from_i64(*next_id), name.clone());
        self.users.lock().unwrap().push(user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<(), InfraError> {
        let mut users = self.users.lock().unwrap();
        if let Some(stored) = users.iter_mut().find(|u| u.id() == user.id()) {
            *stored = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<bool, InfraError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id() != id);
        Ok(users.len() < before)
    }
}
