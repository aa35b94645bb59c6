// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! # Authorization Module
//!
//! OAuth2/JWT bearer-token authorization for the catalog API.
//!
//! ## Flow
//!
//! 1. Client obtains a token from the identity provider (see [`urls`] for the
//!    login/logout redirects this service constructs).
//! 2. Client sends `Authorization: Bearer <JWT>`.
//! 3. Per protected route, [`middleware::RequirePermission`] runs the pipeline:
//!    - extract the bearer token from the header ([`extractor`])
//!    - verify signature, issuer, audience, and expiry against the provider's
//!      JWKS ([`keys`], [`verifier`])
//!    - check the route's permission string against the `permissions` claim
//!      ([`claims`])
//! 4. On success the [`VerifiedClaims`] are injected into request extensions;
//!    any failure short-circuits with a typed [`AuthError`] response and the
//!    handler never runs.
//!
//! ## Security
//!
//! - Only RS256 is accepted against the remote key set; tokens declaring any
//!   other algorithm are rejected, closing algorithm-confusion downgrades.
//! - The shared-secret verification path exists solely for the test
//!   environment and is selected once at startup by configuration, never by a
//!   branch in request handling.

pub mod claims;
pub mod error;
pub mod extractor;
pub mod keys;
pub mod middleware;
pub mod urls;
pub mod verifier;

pub use claims::VerifiedClaims;
pub use error::AuthError;
pub use extractor::Auth;
pub use keys::KeyProvider;
pub use middleware::RequirePermission;
pub use verifier::Authenticator;
