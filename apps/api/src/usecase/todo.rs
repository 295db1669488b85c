//! Todo ユースケース

use std::sync::Arc;

use taskhub_domain::todo::{Todo, TodoDescription, TodoId, TodoTitle};
use taskhub_infra::repository::TodoRepository;

use crate::error::ApiError;

/// Todo 作成の入力
pub struct CreateTodoInput {
    pub title:       TodoTitle,
    pub description: Option<TodoDescription>,
    pub completed:   bool,
}

/// Todo 更新の入力
///
/// 各フィールドは「指定された場合のみ上書き」する部分更新。
/// `description` は二重 `Option` で「省略（変更しない）」と
/// 「明示的な null（クリアする）」を区別する。
pub struct UpdateTodoInput {
    pub title:       Option<TodoTitle>,
    pub description: Option<Option<TodoDescription>>,
    pub completed:   Option<bool>,
}

/// Todo ユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>) -> Self {
        Self { todo_repository }
    }

    /// Todo 一覧を取得する
    ///
    /// `completed` を指定すると完了状態が一致する行のみ返す。
    /// 並び順はストアの主キー順（= 作成順）。
    pub async fn list_todos(&self, completed: Option<bool>) -> Result<Vec<Todo>, ApiError> {
        Ok(self.todo_repository.find_all(completed).await?)
    }

    /// ID で Todo を取得する
    pub async fn get_todo(&self, id: TodoId) -> Result<Option<Todo>, ApiError> {
        Ok(self.todo_repository.find_by_id(id).await?)
    }

    /// Todo を作成する
    pub async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, ApiError> {
        Ok(self
            .todo_repository
            .insert(&input.title, input.description.as_ref(), input.completed)
            .await?)
    }

    /// Todo を部分更新する
    ///
    /// 指定されたフィールドのみ上書きし、省略されたフィールドは変更しない。
    /// 対象が存在しない場合は `Ok(None)` を返す。
    pub async fn update_todo(
        &self,
        id: TodoId,
        input: UpdateTodoInput,
    ) -> Result<Option<Todo>, ApiError> {
        let Some(mut todo) = self.todo_repository.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(new_title) = input.title {
            todo = todo.with_title(new_title);
        }
        if let Some(new_description) = input.description {
            todo = todo.with_description(new_description);
        }
        if let Some(new_completed) = input.completed {
            todo = todo.with_completed(new_completed);
        }

        self.todo_repository.update(&todo).await?;
        Ok(Some(todo))
    }

    /// Todo を削除する
    ///
    /// 削除できた場合は `true`、対象が存在しない場合は `false` を返す。
    pub async fn delete_todo(&self, id: TodoId) -> Result<bool, ApiError> {
        Ok(self.todo_repository.delete(id).await?)
    }

    /// 完了フラグを反転する
    ///
    /// 対象が存在しない場合は `Ok(None)` を返す。
    pub async fn toggle_completed(&self, id: TodoId) -> Result<Option<Todo>, ApiError> {
        let Some(todo) = self.todo_repository.find_by_id(id).await? else {
            return Ok(None);
        };

        let todo = todo.toggled();
        self.todo_repository.update(&todo).await?;
        Ok(Some(todo))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use taskhub_infra::mock::MockTodoRepository;

    use super::*;

    fn create_usecase() -> TodoUseCaseImpl {
        TodoUseCaseImpl::new(Arc::new(MockTodoRepository::new()))
    }

    fn create_input(title: &str) -> CreateTodoInput {
        CreateTodoInput {
            title:       TodoTitle::new(title).unwrap(),
            description: None,
            completed:   false,
        }
    }

    #[tokio::test]
    async fn test_create_todoで採番されたidが返る() {
        let usecase = create_usecase();

        let first = usecase.create_todo(create_input("タスク 1")).await.unwrap();
        let second = usecase.create_todo(create_input("タスク 2")).await.unwrap();

        assert!(second.id().as_i64() > first.id().as_i64());
    }

    #[tokio::test]
    async fn test_get_todoで存在しないidはnoneを返す() {
        let usecase = create_usecase();

        let result = usecase.get_todo(TodoId::from_i64(999)).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_update_todoは指定フィールドのみ上書きする() {
        let usecase = create_usecase();
        let created = usecase
            .create_todo(CreateTodoInput {
                title:       TodoTitle::new("元のタイトル").unwrap(),
                description: Some(TodoDescription::new("元の説明").unwrap()),
                completed:   false,
            })
            .await
            .unwrap();

        // タイトルのみ更新
        let updated = usecase
            .update_todo(
                created.id(),
                UpdateTodoInput {
                    title:       Some(TodoTitle::new("新しいタイトル").unwrap()),
                    description: None,
                    completed:   None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.title().as_str(), "新しいタイトル");
        assert_eq!(updated.description().unwrap().as_str(), "元の説明");
        assert!(!updated.completed());
    }

    #[tokio::test]
    async fn test_update_todoで明示的なnullは説明をクリアする() {
        let usecase = create_usecase();
        let created = usecase
            .create_todo(CreateTodoInput {
                title:       TodoTitle::new("タスク").unwrap(),
                description: Some(TodoDescription::new("説明あり").unwrap()),
                completed:   false,
            })
            .await
            .unwrap();

        let updated = usecase
            .update_todo(
                created.id(),
                UpdateTodoInput {
                    title:       None,
                    description: Some(None),
                    completed:   None,
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.description(), None);
        assert_eq!(updated.title().as_str(), "タスク");
    }

    #[tokio::test]
    async fn test_update_todoで存在しないidはnoneを返す() {
        let usecase = create_usecase();

        let result = usecase
            .update_todo(
                TodoId::from_i64(999),
                UpdateTodoInput {
                    title:       None,
                    description: None,
                    completed:   Some(true),
                },
            )
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_toggle_completedを2回適用すると元に戻る() {
        let usecase = create_usecase();
        let created = usecase.create_todo(create_input("タスク")).await.unwrap();

        let once = usecase
            .toggle_completed(created.id())
            .await
            .unwrap()
            .unwrap();
        assert!(once.completed());

        let twice = usecase
            .toggle_completed(created.id())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(twice.completed(), created.completed());
    }

    #[tokio::test]
    async fn test_delete_todoは2回目の呼び出しでfalseを返す() {
        let usecase = create_usecase();
        let created = usecase.create_todo(create_input("削除対象")).await.unwrap();

        assert!(usecase.delete_todo(created.id()).await.unwrap());
        assert!(!usecase.delete_todo(created.id()).await.unwrap());
        assert!(usecase.get_todo(created.id()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_todosは完了状態でフィルタできる() {
        let usecase = create_usecase();
        usecase
            .create_todo(CreateTodoInput {
                title:       TodoTitle::new("完了済み").unwrap(),
                description: None,
                completed:   true,
            })
            .await
            .unwrap();
        usecase.create_todo(create_input("未完了")).await.unwrap();

        let all = usecase.list_todos(None).await.unwrap();
        let completed = usecase.list_todos(Some(true)).await.unwrap();
        let pending = usecase.list_todos(Some(false)).await.unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].title().as_str(), "完了済み");
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title().as_str(), "未完了");
    }
}
