// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Verified token claims and permission enforcement.

use serde::{Deserialize, Serialize};

use super::AuthError;

/// Decoded, signature-checked JWT payload.
///
/// Only [`super::Authenticator::verify`] constructs this from a wire token;
/// no other code path may fabricate one for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedClaims {
    /// Issuer URL of the identity provider.
    #[serde(default)]
    pub iss: String,
    /// Subject (caller identity).
    #[serde(default)]
    pub sub: String,
    /// Audience; a string or an array of strings depending on the provider.
    #[serde(default)]
    pub aud: Option<serde_json::Value>,
    /// Issued-at timestamp.
    #[serde(default)]
    pub iat: Option<i64>,
    /// Expiry timestamp (seconds since the epoch).
    pub exp: i64,
    /// Permission strings granted by the issuing authority,
    /// e.g. `"movies:create"`. Absent when the provider attached none.
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

impl VerifiedClaims {
    /// Exact-string membership test against the permission set.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .as_deref()
            .is_some_and(|perms| perms.iter().any(|p| p == permission))
    }
}

/// Enforce a permission requirement against verified claims.
///
/// An empty requirement is an authentication-only gate and always succeeds.
/// Membership is exact string match; there are no wildcard or hierarchical
/// semantics. Callers must only pass claims that already passed signature and
/// claim verification.
pub fn check_permission(requirement: &str, claims: &VerifiedClaims) -> Result<(), AuthError> {
    if requirement.is_empty() {
        return Ok(());
    }

    let permissions = claims
        .permissions
        .as_deref()
        .ok_or(AuthError::MissingPermissionsClaim)?;

    if !permissions.iter().any(|p| p == requirement) {
        return Err(AuthError::PermissionDenied);
    }

    Ok(())
}
