// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Actor CRUD handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::Auth;
use crate::error::{ApiError, ValidJson};
use crate::models::{
    ActorListResponse, ActorResponse, CreateActorRequest, DeletedResponse, UpdateActorRequest,
};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/actors",
    tag = "Actors",
    responses(
        (status = 200, description = "All actors in the catalog", body = ActorListResponse),
        (status = 401, description = "Missing `actors:list` permission")
    )
)]
pub async fn list_actors(State(state): State<AppState>) -> Json<ActorListResponse> {
    let store = state.store.read().await;
    Json(ActorListResponse {
        success: true,
        actors: store.actors(),
    })
}

#[utoipa::path(
    post,
    path = "/actors",
    tag = "Actors",
    request_body = CreateActorRequest,
    responses(
        (status = 201, description = "Actor created", body = ActorResponse),
        (status = 401, description = "Missing `actors:create` permission"),
        (status = 422, description = "Empty name")
    )
)]
pub async fn create_actor(
    State(state): State<AppState>,
    Auth(claims): Auth,
    ValidJson(request): ValidJson<CreateActorRequest>,
) -> Result<(StatusCode, Json<ActorResponse>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::unprocessable("actor name must not be empty"));
    }

    let mut store = state.store.write().await;
    let actor = store.insert_actor(request.name, request.age, request.gender);
    tracing::info!(subject = %claims.sub, actor_id = actor.id, "actor created");

    Ok((
        StatusCode::CREATED,
        Json(ActorResponse {
            success: true,
            actor,
        }),
    ))
}

#[utoipa::path(
    patch,
    path = "/actors/{actor_id}",
    tag = "Actors",
    request_body = UpdateActorRequest,
    params(("actor_id" = u64, Path, description = "Actor to update")),
    responses(
        (status = 200, description = "Updated actor", body = ActorResponse),
        (status = 401, description = "Missing `actors:update` permission"),
        (status = 404, description = "No such actor")
    )
)]
pub async fn update_actor(
    State(state): State<AppState>,
    Auth(claims): Auth,
    Path(actor_id): Path<u64>,
    ValidJson(request): ValidJson<UpdateActorRequest>,
) -> Result<Json<ActorResponse>, ApiError> {
    let mut store = state.store.write().await;
    let actor = store
        .update_actor(actor_id, request.name, request.age, request.gender)
        .ok_or_else(|| ApiError::not_found("actor not found"))?;
    tracing::info!(subject = %claims.sub, actor_id, "actor updated");

    Ok(Json(ActorResponse {
        success: true,
        actor,
    }))
}

#[utoipa::path(
    delete,
    path = "/actors/{actor_id}",
    tag = "Actors",
    params(("actor_id" = u64, Path, description = "Actor to delete")),
    responses(
        (status = 200, description = "Actor deleted", body = DeletedResponse),
        (status = 401, description = "Missing `actors:delete` permission"),
        (status = 404, description = "No such actor")
    )
)]
pub async fn delete_actor(
    State(state): State<AppState>,
    Auth(claims): Auth,
    Path(actor_id): Path<u64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let mut store = state.store.write().await;
    store
        .remove_actor(actor_id)
        .ok_or_else(|| ApiError::not_found("actor not found"))?;
    tracing::info!(subject = %claims.sub, actor_id, "actor deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: actor_id,
    }))
}
