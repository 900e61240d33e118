use std::sync::Arc;
use log::info;
use crate::config::AppConfig;
use crate::db::Storage;
use crate::store::RecordStore;

pub struct AppState {
    pub config: AppConfig,
    pub store: RecordStore,
}

impl AppState {
    pub fn new(config: AppConfig, storage: Arc<dyn Storage>) -> Self {
        let store = RecordStore::new(storage, config.storage_key.clone());
        info!("Roster stored under key '{}'", store.key());
        Self { config, store }
    }
}
