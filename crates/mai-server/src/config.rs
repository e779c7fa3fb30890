use std::sync::Arc;
use std::time::Duration;

use mai_llm::{
    build_chat_provider, ChatProviderConfig, LlmCoordinateResolver, LlmNarrativeGenerator,
    LlmRegionResolver, OpenAiCompatibleConfig, ProviderError as LlmProviderError,
};
use mai_weather::{
    build_weather_provider, OpenMeteoConfig, ProviderError as WeatherProviderError,
    WeatherProviderConfig, MAX_FORECAST_DAYS,
};
use thiserror::Error;

use crate::pipeline::MaiPipeline;

const DEFAULT_PORT: u16 = 3016;
const DEFAULT_LLM_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not configured")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("llm provider initialization failed: {0}")]
    Llm(#[from] LlmProviderError),

    #[error("weather provider initialization failed: {0}")]
    Weather(#[from] WeatherProviderError),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_host: String,
    pub port: u16,
    pub llm: OpenAiCompatibleConfig,
    pub weather: OpenMeteoConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, so callers can supply a map instead of the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw.clone(),
            })?,
            None => DEFAULT_PORT,
        };

        let model = lookup("MAI_LLM_MODEL").unwrap_or_else(|| DEFAULT_LLM_MODEL.to_string());
        let mut llm = OpenAiCompatibleConfig::new(api_key, model);
        if let Some(base_url) = lookup("MAI_LLM_BASE_URL") {
            llm.base_url = base_url;
        }
        llm.timeout = Duration::from_secs(env_u64(&lookup, "MAI_LLM_TIMEOUT_SECS", 15, 1, 120));

        let mut weather = OpenMeteoConfig::new();
        if let Some(base_url) = lookup("MAI_WEATHER_BASE_URL") {
            weather.base_url = base_url;
        }
        weather.forecast_days = u8::try_from(env_u64(
            &lookup,
            "MAI_FORECAST_DAYS",
            7,
            1,
            u64::from(MAX_FORECAST_DAYS),
        ))
        .unwrap_or(7);
        weather.timeout =
            Duration::from_secs(env_u64(&lookup, "MAI_WEATHER_TIMEOUT_SECS", 10, 1, 120));

        Ok(Self {
            bind_host: lookup("MAI_BIND_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            llm,
            weather,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    /// Wires the live collaborators: one chat provider shared by the three LLM stages.
    pub fn build_pipeline(&self) -> Result<MaiPipeline, ConfigError> {
        let chat = build_chat_provider(ChatProviderConfig::OpenAiCompatible(self.llm.clone()))?;
        let weather = build_weather_provider(WeatherProviderConfig::OpenMeteo(
            self.weather.clone(),
        ))?;

        Ok(MaiPipeline::new(
            Arc::new(LlmRegionResolver::new(Arc::clone(&chat))),
            Arc::new(LlmCoordinateResolver::new(Arc::clone(&chat))),
            weather,
            Arc::new(LlmNarrativeGenerator::new(chat)),
        ))
    }
}

fn env_u64<F>(lookup: &F, name: &str, default: u64, min: u64, max: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
        .clamp(min, max)
}
