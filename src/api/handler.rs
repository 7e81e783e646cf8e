use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};

use super::models::{HealthResponse, MatchedResponse, MismatchResponse, SaveUrlsResponse};
use crate::{
    error::{AppError, AppResult},
    reconcile::{find_mismatches, normalize, sum_points, SourceKind},
    sources::{SourceResolver, SourceStore, SourceUrls},
};

#[derive(Clone)]
pub struct AppState {
    pub sources: Arc<SourceStore>,
    pub resolver: Arc<SourceResolver>,
}

/// Liveness check
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

/// Return the saved source URLs
/// GET /urls
pub async fn get_urls(State(state): State<AppState>) -> Json<SourceUrls> {
    Json(state.sources.get())
}

/// Save one or both source URLs; keys absent from the body keep their value
/// POST /urls
pub async fn save_urls(
    State(state): State<AppState>,
    body: Option<Json<SourceUrls>>,
) -> AppResult<Json<SaveUrlsResponse>> {
    let Some(Json(update)) = body else {
        return Err(AppError::BadRequest("expected JSON body".to_string()));
    };

    let urls = state.sources.update(update);
    info!("✓ Source URLs saved: {:?}", urls);

    Ok(Json(SaveUrlsResponse {
        message: "urls saved".to_string(),
        urls,
    }))
}

/// Run a check, taking URL overrides from query params
/// GET /start?users_url=...&logs_url=...
pub async fn start_check_query(
    State(state): State<AppState>,
    Query(overrides): Query<SourceUrls>,
) -> AppResult<Response> {
    run_check(&state, overrides).await
}

/// Run a check, taking URL overrides from an optional JSON body
/// POST /start
pub async fn start_check_body(
    State(state): State<AppState>,
    body: Option<Json<SourceUrls>>,
) -> AppResult<Response> {
    let overrides = body.map(|Json(b)| b).unwrap_or_default();
    run_check(&state, overrides).await
}

/// Resolve both sources and reconcile them. Saved URLs are the base; request
/// values override per key. Remote payloads are shape-checked as they
/// arrive, so a malformed remote source fails before any fallback is tried;
/// sides with no usable URL are then served from the local file pair.
async fn run_check(state: &AppState, overrides: SourceUrls) -> AppResult<Response> {
    let merged = overrides.merge_over(&state.sources.get());
    info!("Starting points check: {:?}", merged);

    let remote_users = match merged.users_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => {
            let payload = state.resolver.fetch_json(url).await?;
            Some(normalize(SourceKind::Users, payload)?)
        }
        None => None,
    };
    let remote_logs = match merged.logs_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => {
            let payload = state.resolver.fetch_json(url).await?;
            Some(normalize(SourceKind::Logs, payload)?)
        }
        None => None,
    };

    let (users, logs) = match (remote_users, remote_logs) {
        (Some(users), Some(logs)) => (users, logs),
        (maybe_users, maybe_logs) => {
            let (local_users, local_logs) = state.resolver.load_local_pair()?;
            let users = match maybe_users {
                Some(users) => users,
                None => normalize(SourceKind::Users, local_users)?,
            };
            let logs = match maybe_logs {
                Some(logs) => logs,
                None => normalize(SourceKind::Logs, local_logs)?,
            };
            (users, logs)
        }
    };

    let sums = sum_points(&logs);
    let mismatches = find_mismatches(&users, &sums);

    if mismatches.is_empty() {
        info!("✓ All users' points match their logs");
        let body = MatchedResponse {
            message: "All users' points match their logs.".to_string(),
        };
        Ok((StatusCode::OK, Json(body)).into_response())
    } else {
        warn!("✗ Found {} user(s) with mismatched points", mismatches.len());
        let body = MismatchResponse { mismatches };
        Ok((StatusCode::EXPECTATION_FAILED, Json(body)).into_response())
    }
}
