use std::sync::Arc;
use std::time::Instant;

use mai_core::build_index;
use mai_llm::{CoordinateResolver, NarrativeGenerator, RegionResolver};
use mai_weather::WeatherProvider;
use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::protocol::SummaryResponse;

pub const MAX_REGION_CHARS: usize = 200;

/// Trims the requested region and rejects blank or oversized input.
pub fn validate_region(region: Option<&str>) -> Result<String, PipelineError> {
    let trimmed = region.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(PipelineError::Validation("Missing region".to_string()));
    }
    if trimmed.chars().count() > MAX_REGION_CHARS {
        return Err(PipelineError::Validation(format!(
            "Region must be at most {MAX_REGION_CHARS} characters"
        )));
    }
    Ok(trimmed.to_string())
}

#[derive(Clone)]
pub struct MaiPipeline {
    regions: Arc<dyn RegionResolver>,
    geocoder: Arc<dyn CoordinateResolver>,
    weather: Arc<dyn WeatherProvider>,
    narrator: Arc<dyn NarrativeGenerator>,
}

impl MaiPipeline {
    pub fn new(
        regions: Arc<dyn RegionResolver>,
        geocoder: Arc<dyn CoordinateResolver>,
        weather: Arc<dyn WeatherProvider>,
        narrator: Arc<dyn NarrativeGenerator>,
    ) -> Self {
        Self {
            regions,
            geocoder,
            weather,
            narrator,
        }
    }

    /// Runs every stage in order and stops at the first failure.
    pub async fn run(&self, region_input: &str) -> Result<SummaryResponse, PipelineError> {
        let started = Instant::now();
        let result = self.run_stages(region_input).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(out) => info!(region = %out.region, elapsed_ms, "summary ready"),
            Err(err) => warn!(
                input = region_input,
                kind = err.kind(),
                elapsed_ms,
                error = %err,
                "summary failed"
            ),
        }
        result
    }

    async fn run_stages(&self, region_input: &str) -> Result<SummaryResponse, PipelineError> {
        let region = self
            .regions
            .resolve(region_input)
            .await
            .map_err(PipelineError::Resolution)?;
        debug!(stage = "resolve", region = %region);

        let coordinates = self
            .geocoder
            .locate(&region)
            .await
            .map_err(PipelineError::Geocode)?;
        debug!(
            stage = "locate",
            latitude = coordinates.latitude,
            longitude = coordinates.longitude
        );

        let series = self
            .weather
            .forecast(coordinates.latitude, coordinates.longitude)
            .await
            .map_err(|err| {
                debug!(stage = "forecast", data_shape = err.is_data_shape(), error = %err);
                PipelineError::WeatherFetch(err)
            })?;
        debug!(stage = "forecast", provider = self.weather.name(), days = series.len());

        let index = build_index(&series)?;
        debug!(stage = "index", days = index.len(), peak = ?index.peak());

        let summary = self
            .narrator
            .summarize(&region, &index)
            .await
            .map_err(PipelineError::Narrative)?;
        debug!(stage = "summarize", chars = summary.len());

        Ok(SummaryResponse {
            region,
            coordinates,
            summary,
        })
    }
}
