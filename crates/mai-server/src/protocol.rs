use mai_core::Coordinates;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct SummaryRequest {
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub region: String,
    pub coordinates: Coordinates,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthBody {
    pub status: &'static str,
    pub service: &'static str,
}

impl HealthBody {
    pub fn ok() -> Self {
        Self {
            status: "ok",
            service: "mai-server",
        }
    }
}
