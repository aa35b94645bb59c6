// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Casting Catalog API

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::Authenticator;
use crate::config::AppConfig;
use crate::store::CatalogStore;

/// Shared application state, cloned into every handler.
///
/// The configuration and authenticator are immutable after startup; the store
/// is the only mutable shared state and sits behind its own lock.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub authenticator: Arc<Authenticator>,
    pub store: Arc<RwLock<CatalogStore>>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let authenticator = Authenticator::new(&config);
        Self {
            config: Arc::new(config),
            authenticator: Arc::new(authenticator),
            store: Arc::new(RwLock::new(CatalogStore::new())),
        }
    }
}
