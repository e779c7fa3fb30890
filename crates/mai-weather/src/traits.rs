use async_trait::async_trait;
use mai_core::WeatherSeries;

use crate::error::ProviderError;

/// Forward-looking daily forecast, one observation per day.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSeries, ProviderError>;
}
