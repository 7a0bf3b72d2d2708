use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde_json::{json, Value};
use userdeck::api::{set_silent, ApiError, HttpUsersApi, UsersApi};
use userdeck::models::{NewUser, Role, UserRecord};

type Seen = Arc<Mutex<Vec<(String, Value)>>>;

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn healthy_router(seen: Seen) -> Router {
    async fn list(State(seen): State<Seen>, Query(q): Query<HashMap<String, String>>) -> Json<Value> {
        seen.lock().unwrap().push(("GET".into(), json!(q)));
        Json(json!({
            "users": [
                {"_id": "a1", "name": "Ada", "email": "ada@example.com", "role": "admin"},
                {"_id": "b2", "name": "Bob", "email": "bob@example.com", "role": "user"}
            ],
            "totalPages": 4
        }))
    }
    async fn create(State(seen): State<Seen>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        seen.lock().unwrap().push(("POST".into(), body.clone()));
        let mut created = body;
        created["_id"] = json!("new-1");
        (StatusCode::CREATED, Json(created))
    }
    async fn update(State(seen): State<Seen>, Path(id): Path<String>, Json(body): Json<Value>) -> StatusCode {
        seen.lock().unwrap().push((format!("PATCH {}", id), body));
        StatusCode::NO_CONTENT
    }
    async fn delete(State(seen): State<Seen>, Path(id): Path<String>) -> Json<Value> {
        seen.lock().unwrap().push((format!("DELETE {}", id), Value::Null));
        Json(json!({"message": "deleted"}))
    }

    Router::new()
        .route("/api/users", get(list).post(create))
        .route("/api/users/:id", patch(update).delete(delete))
        .with_state(seen)
}

fn broken_router() -> Router {
    Router::new()
        .route("/api/users", get(|| async { "<html>not json</html>" }).post(|| async { StatusCode::BAD_REQUEST }))
        .route(
            "/api/users/:id",
            patch(|| async { StatusCode::NOT_FOUND }).delete(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        )
}

#[tokio::test]
async fn test_list_users_sends_page_and_limit() {
    set_silent(true);
    let seen: Seen = Arc::default();
    let base = spawn(healthy_router(seen.clone())).await;
    let api = HttpUsersApi::new(base).unwrap();

    let page = api.list_users(3, 20).await.unwrap();
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.users.len(), 2);
    assert_eq!(page.users[0].id, "a1");
    assert_eq!(page.users[0].role, Role::Admin);

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].1, json!({"page": "3", "limit": "20"}));
}

#[tokio::test]
async fn test_create_user_posts_draft_and_reads_created_record() {
    set_silent(true);
    let seen: Seen = Arc::default();
    let base = spawn(healthy_router(seen.clone())).await;
    let api = HttpUsersApi::new(base).unwrap();

    let created = api
        .create_user(&NewUser::new("Ada", "ada@example.com", Role::User))
        .await
        .unwrap();
    assert_eq!(created.id, "new-1");
    assert_eq!(created.name, "Ada");

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].0, "POST");
    assert_eq!(seen[0].1, json!({"name": "Ada", "email": "ada@example.com", "role": "user"}));
}

#[tokio::test]
async fn test_update_and_delete_target_encoded_identifier() {
    set_silent(true);
    let seen: Seen = Arc::default();
    let base = spawn(healthy_router(seen.clone())).await;
    let api = HttpUsersApi::new(base).unwrap();

    let user = UserRecord {
        id: "a b".into(),
        name: "Ada".into(),
        email: "ada@example.com".into(),
        role: Role::Admin,
    };
    api.update_user(&user).await.unwrap();
    api.delete_user("a b").await.unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen[0].0, "PATCH a b");
    assert_eq!(
        seen[0].1,
        json!({"_id": "a b", "name": "Ada", "email": "ada@example.com", "role": "admin"})
    );
    assert_eq!(seen[1].0, "DELETE a b");
}

#[tokio::test]
async fn test_failures_surface_as_errors() {
    set_silent(true);
    let base = spawn(broken_router()).await;
    let api = HttpUsersApi::new(base).unwrap();

    assert!(matches!(api.list_users(1, 10).await, Err(ApiError::Decode(_))));
    assert!(matches!(
        api.create_user(&NewUser::default()).await,
        Err(ApiError::Status { status: 400, .. })
    ));

    let user = UserRecord {
        id: "x".into(),
        name: "X".into(),
        email: "x@example.com".into(),
        role: Role::User,
    };
    assert!(matches!(api.update_user(&user).await, Err(ApiError::Status { status: 404, .. })));
    assert!(matches!(api.delete_user("x").await, Err(ApiError::Status { status: 500, .. })));
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    set_silent(true);
    // Bind then drop to get a port nobody listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = HttpUsersApi::new(format!("http://{}", addr)).unwrap();
    assert!(matches!(api.list_users(1, 10).await, Err(ApiError::Network(_))));
}
