// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Public index endpoint reporting service health and record counts.

use axum::{extract::State, Json};

use crate::models::IndexResponse;
use crate::state::AppState;

/// Public index / health endpoint with catalog record counts.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = IndexResponse)
    )
)]
pub async fn index(State(state): State<AppState>) -> Json<IndexResponse> {
    let store = state.store.read().await;
    Json(IndexResponse {
        status: "Healthy".to_string(),
        movies: store.movie_count(),
        actors: store.actor_count(),
    })
}
