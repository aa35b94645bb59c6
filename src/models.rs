// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! # API Data Models
//!
//! Request and response data structures for the catalog endpoints. All types
//! derive `Serialize`, `Deserialize`, and `ToSchema` for JSON handling and
//! OpenAPI documentation.
//!
//! Success responses mirror the error body convention by carrying
//! `"success": true` alongside the payload.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Catalog Records
// =============================================================================

/// A movie in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Movie {
    /// Unique identifier, assigned by the store.
    pub id: u64,
    /// Movie title.
    pub title: String,
    /// Release date as an ISO-8601 date string.
    pub release_date: String,
}

/// An actor in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Actor {
    /// Unique identifier, assigned by the store.
    pub id: u64,
    /// Actor name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Free-form gender string.
    pub gender: String,
}

// =============================================================================
// Request Payloads
// =============================================================================

/// Request to add a movie.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateMovieRequest {
    pub title: String,
    pub release_date: String,
}

/// Partial update of a movie; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMovieRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Request to add an actor.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateActorRequest {
    pub name: String,
    pub age: u32,
    pub gender: String,
}

/// Partial update of an actor; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateActorRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
}

// =============================================================================
// Response Shells
// =============================================================================

/// List of movies.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieListResponse {
    pub success: bool,
    pub movies: Vec<Movie>,
}

/// A single movie.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    pub success: bool,
    pub movie: Movie,
}

/// List of actors.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActorListResponse {
    pub success: bool,
    pub actors: Vec<Actor>,
}

/// A single actor.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActorResponse {
    pub success: bool,
    pub actor: Actor,
}

/// Confirmation of a deletion, naming the removed id.
///
/// Deletions consistently return 200 with this body for both resources.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: u64,
}

/// Public index / health response with record counts.
#[derive(Debug, Serialize, ToSchema)]
pub struct IndexResponse {
    pub status: String,
    pub movies: usize,
    pub actors: usize,
}

/// A constructed provider URL (login or logout).
#[derive(Debug, Serialize, ToSchema)]
pub struct UrlResponse {
    pub success: bool,
    pub url: String,
}
