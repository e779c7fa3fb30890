use std::time::Duration;

/// Open-Meteo serves at most 16 forecast days.
pub const MAX_FORECAST_DAYS: u8 = 16;

#[derive(Debug, Clone)]
pub struct OpenMeteoConfig {
    pub base_url: String,
    pub forecast_days: u8,
    pub timeout: Duration,
}

impl OpenMeteoConfig {
    pub fn new() -> Self {
        Self {
            base_url: "https://api.open-meteo.com".to_string(),
            forecast_days: 7,
            timeout: Duration::from_secs(10),
        }
    }
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub enum WeatherProviderConfig {
    OpenMeteo(OpenMeteoConfig),
}
