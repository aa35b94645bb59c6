// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Authorization failure taxonomy.
//!
//! Every stage of the pipeline terminates with one of these kinds. Failures
//! are terminal per request; there is no retry state.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::error::ErrorBody;

/// Typed authorization failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("authorization header is required")]
    MissingAuthHeader,
    /// Header present but not of the shape `Bearer <token>`.
    #[error("invalid authorization header: expected 'Bearer <token>'")]
    MalformedAuthHeader,
    /// No key-set entry matches the token's key id, or the key-set fetch
    /// failed or timed out. Verification cannot proceed without a key.
    #[error("unable to find an appropriate signing key")]
    KeyNotFound,
    /// Undecodable token segments or missing required structural fields.
    #[error("unable to parse authentication token")]
    MalformedToken,
    /// Expiry claim is in the past.
    #[error("token has expired")]
    TokenExpired,
    /// Audience or issuer mismatch.
    #[error("invalid claims: check audience and issuer")]
    InvalidClaims,
    /// Token verified but carries no `permissions` claim at all.
    #[error("permissions not included in token")]
    MissingPermissionsClaim,
    /// Required permission string is not in the token's permission set.
    #[error("permission not found")]
    PermissionDenied,
}

impl AuthError {
    /// HTTP status for this failure kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingPermissionsClaim => StatusCode::BAD_REQUEST,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::new(status, self.to_string()));
        (status, body).into_response()
    }
}
