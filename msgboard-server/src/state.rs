//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{MessageStore, PgMessageStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    store: Box<dyn MessageStore>,
}

impl AppState {
    pub fn new(store: impl MessageStore + 'static) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                store: Box::new(store),
            }),
        }
    }

    /// State backed by the PostgreSQL store.
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(PgMessageStore::new(pool))
    }

    pub fn store(&self) -> &dyn MessageStore {
        self.inner.store.as_ref()
    }
}
