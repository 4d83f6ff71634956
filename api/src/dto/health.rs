use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,
    pub service: String,
    pub version: String,
    /// Whether the cache backend answered
    pub cache: bool,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn new(cache_healthy: bool) -> Self {
        Self {
            status: if cache_healthy { "healthy" } else { "degraded" }.to_string(),
            service: "verify-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            cache: cache_healthy,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
