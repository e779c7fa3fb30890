use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mai_core::EmptySeriesError;
use mai_llm::ProviderError as LlmProviderError;
use mai_weather::ProviderError as WeatherProviderError;
use thiserror::Error;

use crate::protocol::ErrorBody;

/// Every way a summary request can fail, tagged by the stage that failed.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Validation(String),

    #[error("region resolution failed: {0}")]
    Resolution(#[source] LlmProviderError),

    #[error("coordinate lookup failed: {0}")]
    Geocode(#[source] LlmProviderError),

    #[error("weather fetch failed: {0}")]
    WeatherFetch(#[source] WeatherProviderError),

    #[error(transparent)]
    EmptySeries(#[from] EmptySeriesError),

    #[error("narrative generation failed: {0}")]
    Narrative(#[source] LlmProviderError),
}

impl PipelineError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Resolution(_) => "resolution",
            Self::Geocode(_) => "geocode",
            Self::WeatherFetch(_) => "weather_fetch",
            Self::EmptySeries(_) => "empty_series",
            Self::Narrative(_) => "narrative",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Resolution(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Geocode(_) | Self::WeatherFetch(_) | Self::EmptySeries(_) | Self::Narrative(_) => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}
