use async_trait::async_trait;
use mai_core::{Coordinates, DailyRiskIndex};

use crate::error::ProviderError;
use crate::types::{ChatRequest, ChatResponse};

#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn complete(&self, request: ChatRequest) -> Result<ChatResponse, ProviderError>;
}

/// Turns free-text user input into one standardized region name.
#[async_trait]
pub trait RegionResolver: Send + Sync {
    async fn resolve(&self, free_text: &str) -> Result<String, ProviderError>;
}

#[async_trait]
pub trait CoordinateResolver: Send + Sync {
    async fn locate(&self, region: &str) -> Result<Coordinates, ProviderError>;
}

/// Advisory text only; its output never feeds back into scoring.
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn summarize(
        &self,
        region: &str,
        index: &DailyRiskIndex,
    ) -> Result<String, ProviderError>;
}
