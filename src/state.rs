//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    access::PgAuthClient,
    catalog::{ProblemCatalog, StaticCatalog},
    config::{CatalogSource, Config},
    models::Session,
    store::PgStore,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Database connection pool
    db: PgPool,

    /// Store behind the authoring, role and progress seams
    store: Arc<PgStore>,

    /// Read-model served by the browsing endpoints
    catalog: Arc<dyn ProblemCatalog>,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state, mounting the configured catalogue
    pub fn new(db: PgPool, config: Config) -> Self {
        let store = Arc::new(PgStore::new(db.clone()));
        let catalog: Arc<dyn ProblemCatalog> = match config.catalog {
            CatalogSource::Database => store.clone() as Arc<dyn ProblemCatalog>,
            CatalogSource::Sample => Arc::new(StaticCatalog::new()),
        };

        Self {
            inner: Arc::new(AppStateInner {
                db,
                store,
                catalog,
                config,
            }),
        }
    }

    /// Get a reference to the database pool
    pub fn db(&self) -> &PgPool {
        &self.inner.db
    }

    pub fn store(&self) -> &Arc<PgStore> {
        &self.inner.store
    }

    pub fn catalog(&self) -> &dyn ProblemCatalog {
        self.inner.catalog.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Auth client scoped to one request's session
    pub fn auth_client(&self, session: Option<Session>) -> PgAuthClient {
        PgAuthClient::with_session(self.db().clone(), self.config().clone(), session)
    }
}
