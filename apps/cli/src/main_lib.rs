use std::sync::Arc;

use rentslip_core::history::{HistoryService, HistoryServiceTrait};
use rentslip_storage_json::{HistoryRepository, JsonKeyValueStore};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LogFormat};

/// Shared services for one invocation.
pub struct AppState {
    pub history_service: Arc<dyn HistoryServiceTrait>,
    pub config: Config,
}

pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn build_state(config: Config) -> AppState {
    let store = Arc::new(JsonKeyValueStore::new(config.store_path.clone()));
    tracing::debug!("History store in use: {}", store.path().display());

    let repository = Arc::new(HistoryRepository::new(store));
    let history_service = Arc::new(HistoryService::new(repository));

    AppState {
        history_service,
        config,
    }
}
