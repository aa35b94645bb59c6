// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Token verification pipeline.
//!
//! [`Authenticator`] owns the provider configuration and the key capability
//! and turns a compact JWT into [`VerifiedClaims`] or a typed failure.
//! Verification is binary: there is no partial acceptance, and the stages run
//! strictly in order because each stage's output gates the next's trust
//! assumptions.

use axum::http::HeaderMap;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};

use super::claims::check_permission;
use super::extractor::bearer_token;
use super::keys::{JwksResolver, KeyProvider};
use super::{AuthError, VerifiedClaims};
use crate::config::AppConfig;

pub struct Authenticator {
    keys: KeyProvider,
    audience: String,
    issuer: String,
}

impl Authenticator {
    /// Build the verifier from startup configuration.
    ///
    /// The presence of a testing secret selects the shared-secret key
    /// provider here, once; request handling only ever dispatches on the
    /// resulting [`KeyProvider`] value.
    pub fn new(config: &AppConfig) -> Self {
        let keys = match &config.testing_secret {
            Some(secret) => KeyProvider::FixedSharedSecret(secret.clone()),
            None => KeyProvider::RemoteJwks(JwksResolver::new(config.jwks_url())),
        };
        Self::with_key_provider(keys, config.auth_audience.clone(), config.issuer())
    }

    /// Build the verifier from an explicit key capability.
    ///
    /// Useful when the key source is not derived from environment
    /// configuration, e.g. a resolver pointed at a stand-in provider.
    pub fn with_key_provider(
        keys: KeyProvider,
        audience: impl Into<String>,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            keys,
            audience: audience.into(),
            issuer: issuer.into(),
        }
    }

    /// Verify a bearer token and return its claims.
    ///
    /// 1. Decode the header (unverified) for the declared `kid`; nothing else
    ///    in the token is trusted yet.
    /// 2. Resolve the signing key.
    /// 3. Verify the signature over header+payload with a fixed allowed
    ///    algorithm set, then validate expiry, audience, and issuer.
    pub async fn verify(&self, token: &str) -> Result<VerifiedClaims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::MalformedToken)?;

        let (key, validation) = match &self.keys {
            KeyProvider::RemoteJwks(resolver) => {
                let kid = header.kid.as_deref().ok_or(AuthError::KeyNotFound)?;
                let key = resolver.resolve(kid).await?;

                // RS256 only; a token declaring any other algorithm fails
                // validation, closing algorithm-confusion downgrades.
                let mut validation = Validation::new(Algorithm::RS256);
                validation.leeway = 0;
                validation.set_audience(&[&self.audience]);
                validation.set_issuer(&[&self.issuer]);
                (key, validation)
            }
            KeyProvider::FixedSharedSecret(secret) => {
                let mut validation = Validation::new(Algorithm::HS256);
                validation.leeway = 0;
                validation.validate_aud = false;
                (DecodingKey::from_secret(secret.as_bytes()), validation)
            }
        };

        let data =
            decode::<VerifiedClaims>(token, &key, &validation).map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                jsonwebtoken::errors::ErrorKind::InvalidAudience
                | jsonwebtoken::errors::ErrorKind::InvalidIssuer => AuthError::InvalidClaims,
                _ => AuthError::MalformedToken,
            })?;

        Ok(data.claims)
    }

    /// Full authorization pipeline: extract, verify, enforce.
    ///
    /// Used by the permission middleware; the stages short-circuit on the
    /// first failure.
    pub async fn authorize(
        &self,
        headers: &HeaderMap,
        permission: &str,
    ) -> Result<VerifiedClaims, AuthError> {
        let token = bearer_token(headers)?;
        let claims = self.verify(token).await?;
        check_permission(permission, &claims)?;
        Ok(claims)
    }
}
