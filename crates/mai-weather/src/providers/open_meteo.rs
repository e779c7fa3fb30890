use chrono::NaiveDate;
use mai_core::{WeatherObservation, WeatherSeries};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::{MAX_FORECAST_DAYS, OpenMeteoConfig};
use crate::error::ProviderError;
use crate::traits::WeatherProvider;

const DAILY_VARIABLES: &str =
    "temperature_2m_mean,relative_humidity_2m_mean,precipitation_sum,wind_speed_10m_max";

#[derive(Clone)]
pub struct OpenMeteoProvider {
    config: OpenMeteoConfig,
    client: Client,
}

impl OpenMeteoProvider {
    pub fn new(config: OpenMeteoConfig) -> Result<Self, ProviderError> {
        if config.forecast_days == 0 || config.forecast_days > MAX_FORECAST_DAYS {
            return Err(ProviderError::Config(format!(
                "forecast_days must be within 1..={MAX_FORECAST_DAYS}, got {}",
                config.forecast_days
            )));
        }
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/forecast", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl WeatherProvider for OpenMeteoProvider {
    fn name(&self) -> &'static str {
        "open-meteo"
    }

    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherSeries, ProviderError> {
        let res = self
            .client
            .get(self.endpoint())
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("daily", DAILY_VARIABLES.to_string()),
                ("forecast_days", self.config.forecast_days.to_string()),
                ("wind_speed_unit", "kmh".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            return Err(ProviderError::Api { status, body });
        }

        let body = res.bytes().await?;
        let series = decode_forecast(&body)?;
        debug!(
            latitude,
            longitude,
            days = series.len(),
            "open-meteo forecast decoded"
        );
        Ok(series)
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: DailyBlock,
}

#[derive(Debug, Deserialize)]
struct DailyBlock {
    time: Vec<NaiveDate>,
    temperature_2m_mean: Vec<Option<f64>>,
    relative_humidity_2m_mean: Vec<Option<f64>>,
    precipitation_sum: Vec<Option<f64>>,
    wind_speed_10m_max: Vec<Option<f64>>,
}

fn value_at(
    column: &[Option<f64>],
    i: usize,
    name: &str,
    date: NaiveDate,
) -> Result<f64, ProviderError> {
    match column.get(i).copied().flatten() {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ProviderError::InvalidResponse(format!(
            "missing {name} for {date}"
        ))),
    }
}

/// Decodes a forecast body. A body that is not the expected JSON shape is a
/// `Decode` error; missing or inconsistent daily values are `InvalidResponse`.
fn decode_forecast(body: &[u8]) -> Result<WeatherSeries, ProviderError> {
    let parsed: ForecastResponse = serde_json::from_slice(body)?;
    series_from_daily(parsed.daily)
}

fn series_from_daily(daily: DailyBlock) -> Result<WeatherSeries, ProviderError> {
    let n = daily.time.len();
    let columns = [
        daily.temperature_2m_mean.len(),
        daily.relative_humidity_2m_mean.len(),
        daily.precipitation_sum.len(),
        daily.wind_speed_10m_max.len(),
    ];
    if columns.iter().any(|len| *len != n) {
        return Err(ProviderError::InvalidResponse(format!(
            "daily arrays have mismatched lengths: time={n}, columns={columns:?}"
        )));
    }

    let mut series = WeatherSeries::new();
    for (i, date) in daily.time.iter().copied().enumerate() {
        let observation = WeatherObservation::new(
            value_at(&daily.temperature_2m_mean, i, "temperature_2m_mean", date)?,
            value_at(&daily.relative_humidity_2m_mean, i, "relative_humidity_2m_mean", date)?,
            value_at(&daily.precipitation_sum, i, "precipitation_sum", date)?,
            value_at(&daily.wind_speed_10m_max, i, "wind_speed_10m_max", date)?,
        );
        series.push(date, observation);
    }
    Ok(series)
}
