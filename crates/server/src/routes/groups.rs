use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::messages::{GROUP_CREATED, GROUP_DELETED, GROUP_UPDATED};
use models::group::{Group, GroupInput};
use tracing::{error, info, warn};

use crate::{errors::ApiError, state::ServerState};

#[utoipa::path(
    post, path = "/group/create", tag = "group",
    request_body = crate::openapi::GroupInputDoc,
    responses(
        (status = 200, description = "Created", body = String),
        (status = 400, description = "Invalid payload or storage failure", body = String)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<GroupInput>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(input) = payload.map_err(|e| {
        warn!(err = %e, "group create payload rejected");
        ApiError::from(e)
    })?;
    match state.groups.create(input).await {
        Ok(g) => { info!(id = %g.id, "created group"); Ok((StatusCode::OK, GROUP_CREATED)) }
        Err(e) => { error!(err = %e, "create group failed"); Err(e.into()) }
    }
}

#[utoipa::path(
    get, path = "/group/list", tag = "group",
    responses(
        (status = 200, description = "All groups", body = [crate::openapi::GroupDoc]),
        (status = 400, description = "No groups or storage failure")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Group>>, ApiError> {
    match state.groups.list_all().await {
        Ok(Some(list)) if !list.is_empty() => { info!(count = list.len(), "list groups"); Ok(Json(list)) }
        Ok(_) => Err(ApiError::Empty),
        Err(e) => { error!(err = %e, "list groups failed"); Err(ApiError::Empty) }
    }
}

#[utoipa::path(
    get, path = "/group/list/{id}", tag = "group",
    params(("id" = String, Path, description = "Group ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::GroupDoc),
        (status = 400, description = "Unknown id or storage failure")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<String>) -> Result<Json<Group>, ApiError> {
    match state.groups.get_by_id(&id).await {
        Ok(Some(g)) => Ok(Json(g)),
        Ok(None) => Err(ApiError::Empty),
        Err(e) => { error!(err = %e, %id, "get group failed"); Err(ApiError::Empty) }
    }
}

#[utoipa::path(
    delete, path = "/group/delete/{id}", tag = "group",
    params(("id" = String, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Deleted", body = String),
        (status = 400, description = "Unknown id or storage failure", body = String)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<String>) -> Result<(StatusCode, &'static str), ApiError> {
    match state.groups.delete_by_id(&id).await {
        Ok(()) => { info!(%id, "deleted group"); Ok((StatusCode::OK, GROUP_DELETED)) }
        Err(e) => {
            if !e.is_not_found() { error!(err = %e, %id, "delete group failed"); }
            Err(e.into())
        }
    }
}

#[utoipa::path(
    put, path = "/group/update/{id}", tag = "group",
    params(("id" = String, Path, description = "Group ID")),
    request_body = crate::openapi::GroupInputDoc,
    responses(
        (status = 200, description = "Updated", body = String),
        (status = 400, description = "Unknown id, invalid payload or storage failure", body = String)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<GroupInput>, JsonRejection>,
) -> Result<(StatusCode, &'static str), ApiError> {
    let Json(input) = payload?;
    match state.groups.update_by_id(&id, input).await {
        Ok(g) => { info!(id = %g.id, "updated group"); Ok((StatusCode::OK, GROUP_UPDATED)) }
        Err(e) => {
            if !e.is_not_found() { error!(err = %e, %id, "update group failed"); }
            Err(e.into())
        }
    }
}
