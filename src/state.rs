use std::sync::Arc;

use crate::{config::Config, repositories::Store};

/// Shared application state: the injected store capability plus config.
/// Generic over the backend so the test suite can run the same router
/// against the in-memory store.
pub struct AppState<S: Store> {
    pub store: Arc<S>,
    pub config: Config,
}

impl<S: Store> AppState<S> {
    pub fn new(store: Arc<S>, config: Config) -> Self {
        Self { store, config }
    }
}

impl<S: Store> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config.clone(),
        }
    }
}
