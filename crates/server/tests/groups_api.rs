use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use async_trait::async_trait;
use models::group::Group;
use serde_json::{json, Value};
use service::errors::ServiceError;
use service::group::repository::{memory::InMemoryGroupRepository, GroupRepository};
use tower::Service;

use server::startup::build_app;

fn app() -> Router {
    build_app(Arc::new(InMemoryGroupRepository::new()), "")
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> anyhow::Result<Response> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    Ok(app.clone().call(req).await?)
}

async fn body_text(resp: Response) -> anyhow::Result<String> {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Store whose every call fails the way an unreachable database would.
struct UnavailableRepository;

#[async_trait]
impl GroupRepository for UnavailableRepository {
    async fn save(&self, _group: Group) -> Result<Group, ServiceError> { Err(ServiceError::db("connection refused")) }
    async fn find_all(&self) -> Result<Vec<Group>, ServiceError> { Err(ServiceError::db("connection refused")) }
    async fn find_by_id(&self, _id: &str) -> Result<Option<Group>, ServiceError> { Err(ServiceError::db("connection refused")) }
    async fn delete_by_id(&self, _id: &str) -> Result<(), ServiceError> { Err(ServiceError::db("connection refused")) }
}

fn g1() -> Value {
    json!({"id": "g1", "name": "A", "genre": "Rock", "formationDate": "1990-01-01"})
}

#[tokio::test]
async fn create_then_get_and_list() -> anyhow::Result<()> {
    let app = app();

    let resp = send(&app, "POST", "/group/create", Some(g1())).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await?, "Group created successfully");

    let resp = send(&app, "GET", "/group/list/g1", None).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let got: Value = serde_json::from_str(&body_text(resp).await?)?;
    assert_eq!(got, g1());

    let resp = send(&app, "GET", "/group/list", None).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let list: Vec<Value> = serde_json::from_str(&body_text(resp).await?)?;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], "g1");
    Ok(())
}

#[tokio::test]
async fn empty_list_is_bad_request_with_empty_body() -> anyhow::Result<()> {
    let app = app();
    let resp = send(&app, "GET", "/group/list", None).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn get_unknown_id_is_bad_request_with_empty_body() -> anyhow::Result<()> {
    let app = app();
    let resp = send(&app, "GET", "/group/list/missing", None).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn update_changes_fields_and_keeps_id() -> anyhow::Result<()> {
    let app = app();
    send(&app, "POST", "/group/create", Some(g1())).await?;

    let resp = send(
        &app,
        "PUT",
        "/group/update/g1",
        Some(json!({"name": "B", "genre": "Jazz", "formationDate": "1991-01-01"})),
    )
    .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await?, "Group updated successfully");

    let resp = send(&app, "GET", "/group/list/g1", None).await?;
    let got: Value = serde_json::from_str(&body_text(resp).await?)?;
    assert_eq!(got, json!({"id": "g1", "name": "B", "genre": "Jazz", "formationDate": "1991-01-01"}));
    Ok(())
}

#[tokio::test]
async fn update_unknown_id_reports_message() -> anyhow::Result<()> {
    let app = app();
    let resp = send(&app, "PUT", "/group/update/nope", Some(g1())).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await?, "this id does not exist to update a group");
    Ok(())
}

#[tokio::test]
async fn delete_then_get_is_absent() -> anyhow::Result<()> {
    let app = app();
    send(&app, "POST", "/group/create", Some(g1())).await?;

    let resp = send(&app, "DELETE", "/group/delete/g1", None).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await?, "Group deleted successfully");

    let resp = send(&app, "GET", "/group/list/g1", None).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn delete_unknown_id_reports_message() -> anyhow::Result<()> {
    let app = app();
    let resp = send(&app, "DELETE", "/group/delete/nope", None).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await?, "this id does not exist to delete a group");
    Ok(())
}

#[tokio::test]
async fn duplicate_create_overwrites() -> anyhow::Result<()> {
    let app = app();
    send(&app, "POST", "/group/create", Some(g1())).await?;
    let resp = send(
        &app,
        "POST",
        "/group/create",
        Some(json!({"id": "g1", "name": "B", "genre": "Jazz", "formationDate": "1991-01-01"})),
    )
    .await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, "GET", "/group/list", None).await?;
    let list: Vec<Value> = serde_json::from_str(&body_text(resp).await?)?;
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "B");
    Ok(())
}

#[tokio::test]
async fn malformed_payload_is_bad_request_with_message() -> anyhow::Result<()> {
    let app = app();
    let resp = send(&app, "POST", "/group/create", Some(json!({"id": "g1", "name": "A"}))).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(!body_text(resp).await?.is_empty());

    let resp = send(
        &app,
        "POST",
        "/group/create",
        Some(json!({"id": "g1", "name": "A", "genre": "Rock", "formationDate": "not-a-date"})),
    )
    .await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn malformed_update_payload_is_bad_request_with_message() -> anyhow::Result<()> {
    let app = app();
    send(&app, "POST", "/group/create", Some(g1())).await?;

    let resp = send(&app, "PUT", "/group/update/g1", Some(json!({"name": "B"}))).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(!body_text(resp).await?.is_empty());

    let resp = send(&app, "GET", "/group/list/g1", None).await?;
    let got: Value = serde_json::from_str(&body_text(resp).await?)?;
    assert_eq!(got["name"], "A");
    Ok(())
}

#[tokio::test]
async fn padded_id_is_stored_and_addressable_as_sent() -> anyhow::Result<()> {
    let app = app();
    let resp = send(
        &app,
        "POST",
        "/group/create",
        Some(json!({"id": " g1 ", "name": "A", "genre": "Rock", "formationDate": "1990-01-01"})),
    )
    .await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, "GET", "/group/list/%20g1%20", None).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let got: Value = serde_json::from_str(&body_text(resp).await?)?;
    assert_eq!(got["id"], " g1 ");

    let resp = send(&app, "GET", "/group/list/g1", None).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn storage_failure_on_writes_reports_message() -> anyhow::Result<()> {
    let app = build_app(Arc::new(UnavailableRepository), "");

    let resp = send(&app, "POST", "/group/create", Some(g1())).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await?, "database error: connection refused");

    let resp = send(&app, "PUT", "/group/update/g1", Some(g1())).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await?, "database error: connection refused");

    let resp = send(&app, "DELETE", "/group/delete/g1", None).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(resp).await?, "database error: connection refused");
    Ok(())
}

#[tokio::test]
async fn storage_failure_on_reads_has_empty_body() -> anyhow::Result<()> {
    let app = build_app(Arc::new(UnavailableRepository), "");

    let resp = send(&app, "GET", "/group/list", None).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await?.is_empty());

    let resp = send(&app, "GET", "/group/list/g1", None).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn routes_honour_base_path() -> anyhow::Result<()> {
    let app = build_app(Arc::new(InMemoryGroupRepository::new()), "/groups-service");
    let resp = send(&app, "POST", "/groups-service/group/create", Some(g1())).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = send(&app, "GET", "/groups-service/group/list/g1", None).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let resp = send(&app, "GET", "/group/list/g1", None).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn health_and_openapi_are_served() -> anyhow::Result<()> {
    let app = app();
    let resp = send(&app, "GET", "/health", None).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_text(resp).await?)?;
    assert_eq!(body["status"], "ok");

    let resp = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = serde_json::from_str(&body_text(resp).await?)?;
    assert!(doc["paths"]["/group/create"].is_object());
    Ok(())
}
