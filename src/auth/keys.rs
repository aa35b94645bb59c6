// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Signing-key resolution.
//!
//! [`KeyProvider`] is the capability the verifier uses to obtain a decoding
//! key. The variant is chosen once at startup from configuration:
//!
//! - [`KeyProvider::RemoteJwks`] — production: fetch the provider's published
//!   JWKS over HTTPS and select the key matching the token's `kid`.
//! - [`KeyProvider::FixedSharedSecret`] — test environment only: a fixed
//!   HS256 secret, bypassing remote discovery entirely.
//!
//! The key set is fetched per verification, never cached across requests;
//! this mirrors the provider-discovery behavior the service is specified to
//! have. A TTL-bounded cache would be a safe improvement but changes
//! observable behavior, so it is deliberately not implemented.

use std::time::Duration;

use jsonwebtoken::jwk::{AlgorithmParameters, Jwk, JwkSet};
use jsonwebtoken::DecodingKey;

use super::AuthError;

/// Bound on the outbound JWKS fetch. A timeout is treated like any other
/// fetch failure: the key cannot be found.
const JWKS_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of token-verification keys, selected once at startup.
pub enum KeyProvider {
    /// Resolve RSA keys from the provider's JWKS endpoint.
    RemoteJwks(JwksResolver),
    /// Fixed HS256 secret known only to the test environment.
    FixedSharedSecret(String),
}

/// Fetches the provider's JWKS and selects keys by key id.
pub struct JwksResolver {
    jwks_url: String,
    client: reqwest::Client,
}

impl JwksResolver {
    pub fn new(jwks_url: impl Into<String>) -> Self {
        Self {
            jwks_url: jwks_url.into(),
            client: reqwest::Client::builder()
                .timeout(JWKS_FETCH_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Resolve the decoding key for the given key id.
    ///
    /// Scans the published key sequence in order; the first entry with a
    /// matching `kid` wins. Every transport or parse failure collapses into
    /// [`AuthError::KeyNotFound`], keeping the failure taxonomy small for
    /// callers. The underlying cause is logged here.
    pub async fn resolve(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        let jwks = self.fetch().await?;

        let jwk = jwks
            .keys
            .iter()
            .find(|key| key.common.key_id.as_deref() == Some(kid))
            .ok_or(AuthError::KeyNotFound)?;

        decoding_key(jwk)
    }

    async fn fetch(&self) -> Result<JwkSet, AuthError> {
        let response = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "JWKS fetch failed");
                AuthError::KeyNotFound
            })?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "JWKS endpoint returned an error");
            return Err(AuthError::KeyNotFound);
        }

        response.json().await.map_err(|err| {
            tracing::warn!(error = %err, "JWKS document could not be parsed");
            AuthError::KeyNotFound
        })
    }
}

/// Build a decoding key from a JWK record.
///
/// Only RSA keys verify tokens here; an entry of any other type is not an
/// appropriate key. RSA material that fails to decode is a structural fault
/// of the token/key pair and maps to `MalformedToken`.
fn decoding_key(jwk: &Jwk) -> Result<DecodingKey, AuthError> {
    match &jwk.algorithm {
        AlgorithmParameters::RSA(rsa) => {
            DecodingKey::from_rsa_components(&rsa.n, &rsa.e).map_err(|err| {
                tracing::warn!(error = %err, "undecodable RSA key in JWKS");
                AuthError::MalformedToken
            })
        }
        _ => Err(AuthError::KeyNotFound),
    }
}
