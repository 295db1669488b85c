//! ユーザーユースケース

use std::sync::Arc;

use taskhub_domain::user::{User, UserId, UserName};
use taskhub_infra::repository::UserRepository;

use crate::error::ApiError;

/// ユーザー作成の入力
pub struct CreateUserInput {
    pub name: UserName,
}

/// ユーザー更新の入力
pub struct UpdateUserInput {
    pub name: Option<UserName>,
}

/// ユーザーユースケース
pub struct UserUseCaseImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UserUseCaseImpl {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// ユーザー一覧を作成順で取得する
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.user_repository.find_all().await?)
    }

    /// ID でユーザーを取得する
    pub async fn get_user(&self, id: UserId) -> Result<Option<User>, ApiError> {
        Ok(self.user_repository.find_by_id(id).await?)
    }

    /// ユーザーを作成する
    pub async fn create_user(&self, input: CreateUserInput) -> Result<User, ApiError> {
        Ok(self.user_repository.insert(&input.name).await?)
    }

    /// ユーザーを部分更新する
    ///
    /// 対象が存在しない場合は `Ok(None)` を返す。
    pub async fn update_user(
        &self,
        id: UserId,
        input: UpdateUserInput,
    ) -> Result<Option<User>, ApiError> {
        let Some(mut user) = self.user_repository.find_by_id(id).await? else {
            return Ok(None);
        };

        if let Some(new_name) = input.name {
            user = user.with_name(new_name);
        }

        self.user_repository.update(&user).await?;
        Ok(Some(user))
    }

    /// ユーザーを削除する
    ///
    /// 削除できた場合は `true` を返す。
    pub async fn delete_user(&self, id: UserId) -> Result<bool, ApiError> {
        Ok(self.user_repository.delete(id).await?)
    }
}
