//! Integration tests for the HTTP API
//!
//! Each test binds a server to an ephemeral port and talks to it with reqwest.

use eatsy::app::ServerConfig;
use eatsy::server::ApiResponse;
use eatsy::{InMemoryRecipeRegistry, RecipeModel, RecipeServer};
use reqwest::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tokio::net::TcpListener;

async fn spawn_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let registry = Arc::new(InMemoryRecipeRegistry::default());
    let server = RecipeServer::new(registry, ServerConfig::default());
    tokio::spawn(server.serve_with_listener(listener));

    format!("http://{}/api/v1", addr)
}

fn toast_body() -> serde_json::Value {
    json!({
        "name": "Toast",
        "ingredients": ["bread"],
        "method": {"1": "toast bread"}
    })
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{base}/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: ApiResponse<String> = response.json().await.unwrap();
    assert!(body.success);
}

#[tokio::test]
async fn test_create_then_list() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/recipes"))
        .json(&toast_body())
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: ApiResponse<RecipeModel> = response.json().await.unwrap();
    let created = created.data.unwrap();
    assert!(created.key.is_some());

    let listed: ApiResponse<Vec<RecipeModel>> = client
        .get(format!("{base}/recipes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(listed.data.unwrap(), vec![created]);
}

#[tokio::test]
async fn test_blank_name_is_bad_request() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/recipes"))
        .json(&json!({"name": "   ", "ingredients": ["x"], "method": {"1": "y"}}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ApiResponse<RecipeModel> = response.json().await.unwrap();
    assert!(!body.success);
    assert!(body.error.unwrap().contains("name"));

    let listed: ApiResponse<Vec<RecipeModel>> = client
        .get(format!("{base}/recipes"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(listed.data.unwrap().is_empty());
}

#[tokio::test]
async fn test_non_text_ingredient_is_invalid_recipe() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/recipes"))
        .json(&json!({"name": "Toast", "ingredients": [42]}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ApiResponse<RecipeModel> = response.json().await.unwrap();
    assert!(!body.success);
    assert!(body.data.is_none());
    assert!(body.error.unwrap().contains("ingredients"));
}

#[tokio::test]
async fn test_missing_name_is_invalid_recipe() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/recipes"))
        .json(&json!({"ingredients": ["x"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: ApiResponse<RecipeModel> = response.json().await.unwrap();
    assert!(!body.success);
    assert!(body.error.unwrap().contains("name must not be empty"));
}

#[tokio::test]
async fn test_malformed_update_body_leaves_recipe_in_place() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: ApiResponse<RecipeModel> = client
        .post(format!("{base}/recipes"))
        .json(&toast_body())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let k1 = created.data.unwrap().key.unwrap();

    let response = client
        .put(format!("{base}/recipes/{k1}"))
        .json(&json!({"name": "Toast", "method": {"one": "toast"}}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ApiResponse<RecipeModel> = response.json().await.unwrap();
    assert!(!body.success);

    let still_there = client
        .get(format!("{base}/recipes/{k1}"))
        .send()
        .await
        .unwrap();
    assert_eq!(still_there.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_unknown_key_is_not_found() {
    let base = spawn_server().await;

    let response = reqwest::get(format!("{base}/recipes/recipe-missing"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rotates_key_and_delete_returns_list() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: ApiResponse<RecipeModel> = client
        .post(format!("{base}/recipes"))
        .json(&toast_body())
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let k1 = created.data.unwrap().key.unwrap();

    let response = client
        .put(format!("{base}/recipes/{k1}"))
        .json(&json!({
            "name": "Toast",
            "ingredients": ["bread", "butter"],
            "method": {"1": "toast", "2": "butter"}
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: ApiResponse<RecipeModel> = response.json().await.unwrap();
    let k2 = updated.data.unwrap().key.unwrap();
    assert_ne!(k1, k2);

    let old = client
        .get(format!("{base}/recipes/{k1}"))
        .send()
        .await
        .unwrap();
    assert_eq!(old.status(), StatusCode::NOT_FOUND);

    let fetched: ApiResponse<RecipeModel> = client
        .get(format!("{base}/recipes/{k2}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched.data.unwrap().method.len(), 2);

    let remaining: ApiResponse<Vec<RecipeModel>> = client
        .delete(format!("{base}/recipes/{k2}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(remaining.data.unwrap().is_empty());

    let again = client
        .delete(format!("{base}/recipes/{k2}"))
        .send()
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::OK);
}
