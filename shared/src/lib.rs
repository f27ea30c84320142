use serde::{Deserialize, Serialize};

/// Status value reported by a healthy process.
pub const STATUS_OK: &str = "ok";

/// Health check response from `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Error body returned for requests the server cannot route.
///
/// Serializes as `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
