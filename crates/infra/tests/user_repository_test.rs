//! UserRepository の結合テスト

use pretty_assertions::assert_eq;
use taskhub_domain::user::{UserId, UserName};
use taskhub_infra::{
    db,
    repository::{SqliteUserRepository, UserRepository},
};

async fn setup_repository() -> SqliteUserRepository {
    let pool = db::create_in_memory_pool()
        .await
        .expect("テスト用プールの作成に失敗");
    db::run_migrations(&pool)
        .await
        .expect("マイグレーションの適用に失敗");
    SqliteUserRepository::new(pool)
}

fn name(value: &str) -> UserName {
    UserName::new(value).unwrap()
}

#[tokio::test]
async fn test_insertした内容がfind_by_idで取得できる() {
    let repo = setup_repository().await;

    let created = repo.insert(&name("山田太郎")).await.unwrap();
    let found = repo.find_by_id(created.id()).await.unwrap().unwrap();

    assert_eq!(found, created);
    assert_eq!(found.name().as_str(), "山田太郎");
}

#[tokio::test]
async fn test_find_by_idで存在しないidはnoneを返す() {
    let repo = setup_repository().await;

    assert!(
        repo.find_by_id(UserId::from_i64(999))
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_find_allは挿入順で全件を返す() {
    let repo = setup_repository().await;

    repo.insert(&name("山田太郎")).await.unwrap();
    repo.insert(&name("田中花子")).await.unwrap();

    let users = repo.find_all().await.unwrap();

    let names: Vec<&str> = users.iter().map(|u| u.name().as_str()).collect();
    assert_eq!(names, vec!["山田太郎", "田中花子"]);
}

#[tokio::test]
async fn test_updateで名前が上書きされる() {
    let repo = setup_repository().await;

    let created = repo.insert(&name("山田太郎")).await.unwrap();
    let updated = created.with_name(name("山田次郎"));
    repo.update(&updated).await.unwrap();

    let found = repo.find_by_id(updated.id()).await.unwrap().unwrap();
    assert_eq!(found.name().as_str(), "山田次郎");
}

#[tokio::test]
async fn test_deleteで行が削除されtrueを返す() {
    let repo = setup_repository().await;

    let created = repo.insert(&name("削除対象")).await.unwrap();

    assert!(repo.delete(created.id()).await.unwrap());
    assert!(repo.find_by_id(created.id()).await.unwrap().is_none());
}

#[tokio::test]
async fn test_deleteで存在しないidはfalseを返す() {
    let repo = setup_repository().await;

    assert!(!repo.delete(UserId::from_i64(999)).await.unwrap());
}
