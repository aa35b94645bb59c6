// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Per-route permission middleware.
//!
//! [`RequirePermission`] is a tower layer carrying a single permission
//! string. It is attached to individual method routes at router construction,
//! so each operation declares its requirement exactly once:
//!
//! ```rust,ignore
//! .route(
//!     "/movies",
//!     get(movies::list_movies)
//!         .route_layer(RequirePermission::new(auth.clone(), "movies:list"))
//!         .merge(
//!             post(movies::create_movie)
//!                 .route_layer(RequirePermission::new(auth.clone(), "movies:create")),
//!         ),
//! )
//! ```
//!
//! On failure the inner service is never called; the typed `AuthError`
//! becomes the response. On success the verified claims are inserted into
//! request extensions for the handler's `Auth` extractor.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};

use super::Authenticator;

/// Layer gating a route behind a permission string.
///
/// An empty permission string requires authentication only.
#[derive(Clone)]
pub struct RequirePermission {
    authenticator: Arc<Authenticator>,
    permission: &'static str,
}

impl RequirePermission {
    pub fn new(authenticator: Arc<Authenticator>, permission: &'static str) -> Self {
        Self {
            authenticator,
            permission,
        }
    }

    /// Authentication-only gate with no specific permission.
    pub fn authenticated(authenticator: Arc<Authenticator>) -> Self {
        Self::new(authenticator, "")
    }
}

impl<S> Layer<S> for RequirePermission {
    type Service = RequirePermissionService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequirePermissionService {
            inner,
            authenticator: Arc::clone(&self.authenticator),
            permission: self.permission,
        }
    }
}

/// Service produced by [`RequirePermission`].
#[derive(Clone)]
pub struct RequirePermissionService<S> {
    inner: S,
    authenticator: Arc<Authenticator>,
    permission: &'static str,
}

impl<S> Service<Request> for RequirePermissionService<S>
where
    S: Service<Request, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request) -> Self::Future {
        let authenticator = Arc::clone(&self.authenticator);
        let permission = self.permission;
        // Take the service that polled ready, leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            match authenticator.authorize(req.headers(), permission).await {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    inner.call(req).await
                }
                Err(err) => {
                    tracing::debug!(permission, error = %err, "request denied");
                    Ok(err.into_response())
                }
            }
        })
    }
}
