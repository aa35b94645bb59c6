// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Bearer-token extraction and the `Auth` claims extractor.
//!
//! [`bearer_token`] is the pure parsing stage of the pipeline. The [`Auth`]
//! extractor lets handlers receive the verified claims; routes behind
//! [`super::middleware::RequirePermission`] get them from request extensions,
//! anything else falls back to running verification itself.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use super::{AuthError, VerifiedClaims};
use crate::state::AppState;

/// Pull the bearer token out of the `Authorization` header.
///
/// The scheme match is case-insensitive and the header must consist of
/// exactly one scheme prefix and one nonempty token, separated by a single
/// space. No side effects; pure parsing.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?;
    let value = header
        .to_str()
        .map_err(|_| AuthError::MalformedAuthHeader)?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or(AuthError::MalformedAuthHeader)?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() || token.contains(' ') {
        return Err(AuthError::MalformedAuthHeader);
    }

    Ok(token)
}

/// Extractor providing the verified claims to a handler.
///
/// # Example
///
/// ```rust,ignore
/// async fn create_movie(
///     Auth(claims): Auth,
///     State(state): State<AppState>,
/// ) -> Result<Json<MovieResponse>, ApiError> {
///     // claims.sub identifies the caller
/// }
/// ```
pub struct Auth(pub VerifiedClaims);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The permission middleware has usually verified the token already.
        if let Some(claims) = parts.extensions.get::<VerifiedClaims>().cloned() {
            return Ok(Auth(claims));
        }

        let token = bearer_token(&parts.headers)?.to_string();
        let claims = state.authenticator.verify(&token).await?;
        Ok(Auth(claims))
    }
}
