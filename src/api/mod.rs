// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! Router construction.
//!
//! Each protected operation declares its permission requirement here, at
//! route registration, by wrapping its method route in
//! [`RequirePermission`]. Handlers stay free of authorization decisions.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::RequirePermission,
    error::ApiError,
    models::{
        Actor, ActorListResponse, ActorResponse, CreateActorRequest, CreateMovieRequest,
        DeletedResponse, IndexResponse, Movie, MovieListResponse, MovieResponse,
        UpdateActorRequest, UpdateMovieRequest, UrlResponse,
    },
    state::AppState,
};

pub mod actors;
pub mod health;
pub mod identity;
pub mod movies;

pub fn router(state: AppState) -> Router {
    let auth = state.authenticator.clone();

    let api_routes = Router::new()
        .route("/", get(health::index))
        .route("/auth/login-url", get(identity::login_url))
        .route("/auth/logout-url", get(identity::logout_url))
        .route(
            "/movies",
            get(movies::list_movies)
                .route_layer(RequirePermission::new(auth.clone(), "movies:list"))
                .merge(
                    post(movies::create_movie)
                        .route_layer(RequirePermission::new(auth.clone(), "movies:create")),
                ),
        )
        .route(
            "/movies/{movie_id}",
            patch(movies::update_movie)
                .route_layer(RequirePermission::new(auth.clone(), "movies:update"))
                .merge(
                    delete(movies::delete_movie)
                        .route_layer(RequirePermission::new(auth.clone(), "movies:delete")),
                ),
        )
        .route(
            "/actors",
            get(actors::list_actors)
                .route_layer(RequirePermission::new(auth.clone(), "actors:list"))
                .merge(
                    post(actors::create_actor)
                        .route_layer(RequirePermission::new(auth.clone(), "actors:create")),
                ),
        )
        .route(
            "/actors/{actor_id}",
            patch(actors::update_actor)
                .route_layer(RequirePermission::new(auth.clone(), "actors:update"))
                .merge(
                    delete(actors::delete_actor)
                        .route_layer(RequirePermission::new(auth, "actors:delete")),
                ),
        )
        .fallback(unknown_route)
        .with_state(state);

    api_routes
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn unknown_route() -> ApiError {
    ApiError::not_found("not found")
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::index,
        identity::login_url,
        identity::logout_url,
        movies::list_movies,
        movies::create_movie,
        movies::update_movie,
        movies::delete_movie,
        actors::list_actors,
        actors::create_actor,
        actors::update_actor,
        actors::delete_actor
    ),
    components(
        schemas(
            Movie,
            Actor,
            CreateMovieRequest,
            UpdateMovieRequest,
            CreateActorRequest,
            UpdateActorRequest,
            MovieListResponse,
            MovieResponse,
            ActorListResponse,
            ActorResponse,
            DeletedResponse,
            IndexResponse,
            UrlResponse
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Identity", description = "Provider login/logout URLs"),
        (name = "Movies", description = "Movie catalog management"),
        (name = "Actors", description = "Actor catalog management")
    )
)]
struct ApiDoc;
