use std::sync::Arc;

use crate::config::WeatherProviderConfig;
use crate::error::ProviderError;
use crate::providers::OpenMeteoProvider;
use crate::traits::WeatherProvider;

pub fn build_weather_provider(
    cfg: WeatherProviderConfig,
) -> Result<Arc<dyn WeatherProvider>, ProviderError> {
    match cfg {
        WeatherProviderConfig::OpenMeteo(c) => Ok(Arc::new(OpenMeteoProvider::new(c)?)),
    }
}
