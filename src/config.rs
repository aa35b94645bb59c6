// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! # Runtime Configuration
//!
//! Process-wide configuration, read from the environment exactly once at
//! startup and immutable thereafter. Verification logic never reads ambient
//! environment state directly; everything it needs flows through [`AppConfig`].
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `BASE_URL` | Redirect target used in login/logout URLs | `http://localhost:8000` |
//! | `AUTH_DOMAIN` | Identity provider domain (e.g. `tenant.auth0.com`) | Required |
//! | `AUTH_CLIENT_ID` | OAuth client id | Required |
//! | `AUTH_AUDIENCE` | Expected JWT audience claim | Required |
//! | `APP_ENV` | Set to `testing` to verify with a shared secret | Unset |
//! | `TESTING_JWT_SECRET` | HS256 secret, read only when `APP_ENV=testing` | Required in testing |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

use thiserror::Error;

/// Default base URL used in login/logout redirects.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Configuration error raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for environment variable {0}")]
    InvalidVar(&'static str),
}

/// Immutable application configuration.
///
/// Constructed once in `main` and shared (behind `Arc` in [`crate::state::AppState`])
/// with the key resolver, verifier, and URL builders.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Service base URL, used only as the redirect target of login/logout URLs.
    pub base_url: String,
    /// Identity provider domain, e.g. `tenant.auth0.com`.
    pub auth_domain: String,
    /// OAuth client id registered with the provider.
    pub auth_client_id: String,
    /// Audience every verified token must carry.
    pub auth_audience: String,
    /// Shared secret for HS256 verification. `Some` only when `APP_ENV=testing`;
    /// its presence selects the fixed-secret key provider at startup.
    pub testing_secret: Option<String>,
    /// Server bind address.
    pub host: String,
    /// Server bind port.
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let testing = env::var("APP_ENV").map(|v| v == "testing").unwrap_or(false);
        let testing_secret = if testing {
            Some(
                env::var("TESTING_JWT_SECRET")
                    .map_err(|_| ConfigError::MissingVar("TESTING_JWT_SECRET"))?,
            )
        } else {
            None
        };

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidVar("PORT"))?;

        Ok(Self {
            base_url: env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            auth_domain: env::var("AUTH_DOMAIN")
                .map_err(|_| ConfigError::MissingVar("AUTH_DOMAIN"))?,
            auth_client_id: env::var("AUTH_CLIENT_ID")
                .map_err(|_| ConfigError::MissingVar("AUTH_CLIENT_ID"))?,
            auth_audience: env::var("AUTH_AUDIENCE")
                .map_err(|_| ConfigError::MissingVar("AUTH_AUDIENCE"))?,
            testing_secret,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
        })
    }

    /// Expected `iss` claim: `https://{domain}/` per the provider contract.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.auth_domain)
    }

    /// JWKS discovery endpoint for the configured provider.
    pub fn jwks_url(&self) -> String {
        format!("https://{}/.well-known/jwks.json", self.auth_domain)
    }
}
