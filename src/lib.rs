// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Casting Catalog API
//!
//! A movie/actor catalog service whose every write and read is gated by
//! OAuth2/JWT bearer-token authorization with permission-string access
//! control.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - Bearer-token extraction, JWKS-backed verification, permission
//!   enforcement, and the per-route middleware
//! - `store` - In-memory catalog records
//! - `config` / `state` / `error` / `models` - Configuration, shared state,
//!   error boundary, and wire types

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
