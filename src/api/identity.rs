// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Public endpoints exposing the provider login/logout URLs.
//!
//! Token issuance itself is the identity provider's responsibility; these
//! handlers only hand clients the redirect URLs built from configuration.

use axum::{extract::State, Json};

use crate::auth::urls;
use crate::models::UrlResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/auth/login-url",
    tag = "Identity",
    responses(
        (status = 200, description = "Provider authorize URL", body = UrlResponse)
    )
)]
pub async fn login_url(State(state): State<AppState>) -> Json<UrlResponse> {
    Json(UrlResponse {
        success: true,
        url: urls::login_url(&state.config),
    })
}

#[utoipa::path(
    get,
    path = "/auth/logout-url",
    tag = "Identity",
    responses(
        (status = 200, description = "Provider logout URL", body = UrlResponse)
    )
)]
pub async fn logout_url(State(state): State<AppState>) -> Json<UrlResponse> {
    Json(UrlResponse {
        success: true,
        url: urls::logout_url(&state.config),
    })
}
