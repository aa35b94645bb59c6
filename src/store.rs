// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

//! In-memory catalog store.
//!
//! Record persistence is deliberately simple: two `BTreeMap`s keyed by
//! auto-incremented id, held behind `Arc<RwLock<_>>` in the application state.
//! Iteration order follows insertion ids, so listings are stable.

use std::collections::BTreeMap;

use crate::models::{Actor, Movie};

#[derive(Debug)]
pub struct CatalogStore {
    movies: BTreeMap<u64, Movie>,
    actors: BTreeMap<u64, Actor>,
    next_movie_id: u64,
    next_actor_id: u64,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            movies: BTreeMap::new(),
            actors: BTreeMap::new(),
            next_movie_id: 1,
            next_actor_id: 1,
        }
    }

    // -------------------------------------------------------------------------
    // Movies
    // -------------------------------------------------------------------------

    pub fn movies(&self) -> Vec<Movie> {
        self.movies.values().cloned().collect()
    }

    pub fn movie(&self, id: u64) -> Option<Movie> {
        self.movies.get(&id).cloned()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn insert_movie(&mut self, title: String, release_date: String) -> Movie {
        let id = self.next_movie_id;
        self.next_movie_id += 1;
        let movie = Movie {
            id,
            title,
            release_date,
        };
        self.movies.insert(id, movie.clone());
        movie
    }

    pub fn update_movie(
        &mut self,
        id: u64,
        title: Option<String>,
        release_date: Option<String>,
    ) -> Option<Movie> {
        let movie = self.movies.get_mut(&id)?;
        if let Some(title) = title {
            movie.title = title;
        }
        if let Some(release_date) = release_date {
            movie.release_date = release_date;
        }
        Some(movie.clone())
    }

    pub fn remove_movie(&mut self, id: u64) -> Option<Movie> {
        self.movies.remove(&id)
    }

    // -------------------------------------------------------------------------
    // Actors
    // -------------------------------------------------------------------------

    pub fn actors(&self) -> Vec<Actor> {
        self.actors.values().cloned().collect()
    }

    pub fn actor(&self, id: u64) -> Option<Actor> {
        self.actors.get(&id).cloned()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn insert_actor(&mut self, name: String, age: u32, gender: String) -> Actor {
        let id = self.next_actor_id;
        self.next_actor_id += 1;
        let actor = Actor {
            id,
            name,
            age,
            gender,
        };
        self.actors.insert(id, actor.clone());
        actor
    }

    pub fn update_actor(
        &mut self,
        id: u64,
        name: Option<String>,
        age: Option<u32>,
        gender: Option<String>,
    ) -> Option<Actor> {
        let actor = self.actors.get_mut(&id)?;
        if let Some(name) = name {
            actor.name = name;
        }
        if let Some(age) = age {
            actor.age = age;
        }
        if let Some(gender) = gender {
            actor.gender = gender;
        }
        Some(actor.clone())
    }

    pub fn remove_actor(&mut self, id: u64) -> Option<Actor> {
        self.actors.remove(&id)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
