use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::reconcile::Mismatch;
use crate::sources::SourceUrls;

// ========== RESPONSE MODELS ==========

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Response to saving source URLs
#[derive(Debug, Serialize)]
pub struct SaveUrlsResponse {
    pub message: String,
    pub urls: SourceUrls,
}

/// Check outcome when every user's recorded total matches their logs
#[derive(Debug, Serialize)]
pub struct MatchedResponse {
    pub message: String,
}

/// Check outcome listing the users whose totals disagree
#[derive(Debug, Serialize)]
pub struct MismatchResponse {
    pub mismatches: Vec<Mismatch>,
}
