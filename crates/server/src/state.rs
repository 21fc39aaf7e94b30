//! Application state shared across handlers.

use std::sync::Arc;

use impex_core::{BuyRequest, CartSubmission, Catalog, Message, RecordStore};

use crate::config::AppConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the per-resource record stores. Each store is
/// constructed exactly once here, so resource file paths exist in one place.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    messages: RecordStore<Message>,
    carts: RecordStore<CartSubmission>,
    buy_requests: RecordStore<BuyRequest>,
    catalog: Catalog,
}

impl AppState {
    /// Create a new application state with one store per resource.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let data_dir = config.data_dir.clone();
        Self {
            inner: Arc::new(AppStateInner {
                messages: RecordStore::new(&data_dir, "messages"),
                carts: RecordStore::new(&data_dir, "carts"),
                buy_requests: RecordStore::new(&data_dir, "buy-requests"),
                catalog: Catalog::new(&data_dir),
                config,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the contact message store.
    #[must_use]
    pub fn messages(&self) -> &RecordStore<Message> {
        &self.inner.messages
    }

    /// Get a reference to the cart submission store.
    #[must_use]
    pub fn carts(&self) -> &RecordStore<CartSubmission> {
        &self.inner.carts
    }

    /// Get a reference to the buy request store.
    #[must_use]
    pub fn buy_requests(&self) -> &RecordStore<BuyRequest> {
        &self.inner.buy_requests
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }
}
