// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Movie CRUD handlers.
//!
//! Authorization happens in the per-route permission middleware before any
//! handler below runs; the `Auth` extractor only reads the already-verified
//! claims from request extensions.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::Auth;
use crate::error::{ApiError, ValidJson};
use crate::models::{
    CreateMovieRequest, DeletedResponse, MovieListResponse, MovieResponse, UpdateMovieRequest,
};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/movies",
    tag = "Movies",
    responses(
        (status = 200, description = "All movies in the catalog", body = MovieListResponse),
        (status = 401, description = "Missing `movies:list` permission")
    )
)]
pub async fn list_movies(State(state): State<AppState>) -> Json<MovieListResponse> {
    let store = state.store.read().await;
    Json(MovieListResponse {
        success: true,
        movies: store.movies(),
    })
}

#[utoipa::path(
    post,
    path = "/movies",
    tag = "Movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created", body = MovieResponse),
        (status = 401, description = "Missing `movies:create` permission"),
        (status = 422, description = "Empty title or release date")
    )
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Auth(claims): Auth,
    ValidJson(request): ValidJson<CreateMovieRequest>,
) -> Result<(StatusCode, Json<MovieResponse>), ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::unprocessable("movie title must not be empty"));
    }
    if request.release_date.trim().is_empty() {
        return Err(ApiError::unprocessable("movie release date must not be empty"));
    }

    let mut store = state.store.write().await;
    let movie = store.insert_movie(request.title, request.release_date);
    tracing::info!(subject = %claims.sub, movie_id = movie.id, "movie created");

    Ok((
        StatusCode::CREATED,
        Json(MovieResponse {
            success: true,
            movie,
        }),
    ))
}

#[utoipa::path(
    patch,
    path = "/movies/{movie_id}",
    tag = "Movies",
    request_body = UpdateMovieRequest,
    params(("movie_id" = u64, Path, description = "Movie to update")),
    responses(
        (status = 200, description = "Updated movie", body = MovieResponse),
        (status = 401, description = "Missing `movies:update` permission"),
        (status = 404, description = "No such movie")
    )
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Auth(claims): Auth,
    Path(movie_id): Path<u64>,
    ValidJson(request): ValidJson<UpdateMovieRequest>,
) -> Result<Json<MovieResponse>, ApiError> {
    let mut store = state.store.write().await;
    let movie = store
        .update_movie(movie_id, request.title, request.release_date)
        .ok_or_else(|| ApiError::not_found("movie not found"))?;
    tracing::info!(subject = %claims.sub, movie_id, "movie updated");

    Ok(Json(MovieResponse {
        success: true,
        movie,
    }))
}

#[utoipa::path(
    delete,
    path = "/movies/{movie_id}",
    tag = "Movies",
    params(("movie_id" = u64, Path, description = "Movie to delete")),
    responses(
        (status = 200, description = "Movie deleted", body = DeletedResponse),
        (status = 401, description = "Missing `movies:delete` permission"),
        (status = 404, description = "No such movie")
    )
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Auth(claims): Auth,
    Path(movie_id): Path<u64>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let mut store = state.store.write().await;
    store
        .remove_movie(movie_id)
        .ok_or_else(|| ApiError::not_found("movie not found"))?;
    tracing::info!(subject = %claims.sub, movie_id, "movie deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: movie_id,
    }))
}
