use std::sync::Arc;
use tracing::info;

use crate::{
    api::handler::AppState,
    config::Config,
    error::AppResult,
    sources::{SourceResolver, SourceStore},
};

pub fn initialize_app_state(config: &Config) -> AppResult<AppState> {
    info!("Initializing application components ...");

    // Saved source URLs, empty until the operator saves a pair
    let sources = Arc::new(SourceStore::new());
    info!("✅ Source URL store initialized");

    let resolver = Arc::new(SourceResolver::new(config)?);
    info!(
        "✅ Source resolver initialized (timeout: {}s, fallback: {}, {})",
        config.fetch_timeout_secs, config.users_file, config.logs_file
    );

    Ok(AppState { sources, resolver })
}
