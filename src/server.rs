use axum::{
    routing::get,
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::api::{
    handler::{
        get_urls, health_check, save_urls, start_check_body, start_check_query, AppState,
    },
    ui::ui_page,
};

pub async fn create_app(state: AppState) -> Router {
    info!("⚙️ Setting up HTTP routes...");

    let app = Router::new()
        // URL input page
        .route("/", get(ui_page))
        // Public health check endpoint
        .route("/health", get(health_check))
        // Saved source URLs
        .route("/urls", get(get_urls).post(save_urls))
        // Run a reconciliation check
        .route("/start", get(start_check_query).post(start_check_body))
        .layer(CompressionLayer::new())
        // The input page and the check endpoints are meant to be reachable
        // from anywhere, as the original deployment was.
        .layer(CorsLayer::very_permissive())
        // Add request tracing
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("✓ HTTP routes configured");
    app
}

pub async fn run_server(
    app: Router,
    bind_address: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("🌐 Server listening on: {}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
