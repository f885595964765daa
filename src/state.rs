use crate::config::Config;
use crate::store::ItemStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ItemStore,
    pub config: Arc<Config>,
}

#[cfg(test)]
impl AppState {
    /// State backed by a fresh in-memory database
    pub async fn in_memory(variant: crate::config::ItemVariant) -> Self {
        let store = ItemStore::in_memory(variant)
            .await
            .expect("Failed to create in-memory store");

        let config = Config {
            variant,
            database_path: ":memory:".into(),
            database_max_connections: 1,
            service_port: 3000,
            service_host: "127.0.0.1".to_string(),
        };

        AppState {
            store,
            config: Arc::new(config),
        }
    }
}
