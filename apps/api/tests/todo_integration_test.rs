//! Todo API の結合テスト
//!
//! マイグレーション適用済みのインメモリ SQLite 上で実ルーターを駆動し、
//! 作成 → 取得 → 部分更新 → トグル → 削除のシナリオを検証する。

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use pretty_assertions::assert_eq;
use taskhub_api::app_builder::build_app;
use taskhub_infra::db;
use tower::ServiceExt;

async fn setup_app() -> Router {
    let pool = db::create_in_memory_pool()
        .await
        .expect("テスト用プールの作成に失敗");
    db::run_migrations(&pool)
        .await
        .expect("マイグレーションの適用に失敗");
    build_app(pool)
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn response_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_作成から削除までのシナリオが通る() {
    let app = setup_app().await;

    // 作成
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/todos",
            serde_json::json!({
                "title": "Buy groceries",
                "description": "Milk, bread, and eggs",
                "completed": false
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = response_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["completed"], false);

    // 取得: 作成時と同じ内容が返る
    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, &format!("/api/v1/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, created);

    // 部分更新: タイトルのみ変更、説明と完了フラグは維持される
    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/api/v1/todos/{id}"),
            serde_json::json!({ "title": "Updated" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = response_json(response).await;
    assert_eq!(updated["title"], "Updated");
    assert_eq!(updated["description"], "Milk, bread, and eggs");
    assert_eq!(updated["completed"], false);

    // トグル: 完了フラグが true になる
    let response = app
        .clone()
        .oneshot(empty_request(
            Method::PATCH,
            &format!("/api/v1/todos/{id}/toggle"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await["completed"], true);

    // 削除
    let response = app
        .clone()
        .oneshot(empty_request(
            Method::DELETE,
            &format!("/api/v1/todos/{id}"),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let deleted = response_json(response).await;
    assert_eq!(deleted["success"], true);

    // 削除後の取得は 404
    let response = app
        .oneshot(empty_request(Method::GET, &format!("/api/v1/todos/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_一覧は作成順で返りフィルタが効く() {
    let app = setup_app().await;

    for (title, completed) in [("タスク 1", false), ("タスク 2", true), ("タスク 3", false)] {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/v1/todos",
                serde_json::json!({ "title": title, "completed": completed }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // 全件: 作成順
    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, "/api/v1/todos"))
        .await
        .unwrap();
    let json = response_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["title"], "タスク 1");
    assert_eq!(json[1]["title"], "タスク 2");
    assert_eq!(json[2]["title"], "タスク 3");

    // completed=true のみ
    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, "/api/v1/todos?completed=true"))
        .await
        .unwrap();
    let json = response_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["title"], "タスク 2");

    // completed=false のみ
    let response = app
        .oneshot(empty_request(Method::GET, "/api/v1/todos?completed=false"))
        .await
        .unwrap();
    let json = response_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_バリデーション違反はストアに到達せず422になる() {
    let app = setup_app().await;

    // 空タイトル
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/todos",
            serde_json::json!({ "title": "" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // タイトル欠落（axum の Json 抽出で拒否される）
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/todos",
            serde_json::json!({ "description": "タイトルなし" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // ストアに何も書かれていない
    let response = app
        .oneshot(empty_request(Method::GET, "/api/v1/todos"))
        .await
        .unwrap();
    assert_eq!(response_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_エラーレスポンスはproblem_details形式で返る() {
    let app = setup_app().await;

    let response = app
        .oneshot(empty_request(Method::GET, "/api/v1/todos/999"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = response_json(response).await;
    assert_eq!(json["status"], 404);
    assert_eq!(json["title"], "Not Found");
    assert!(json["type"].as_str().unwrap().ends_with("/not-found"));
}
