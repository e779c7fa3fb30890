use std::sync::Arc;

use async_trait::async_trait;
use mai_core::Coordinates;
use serde::Deserialize;
use tracing::debug;

use crate::error::ProviderError;
use crate::traits::{ChatProvider, CoordinateResolver};
use crate::types::ChatRequest;

const SYSTEM_PROMPT: &str = "You are a geocoder. Given a place name, reply with only a JSON object \
of the form {\"latitude\": <decimal degrees>, \"longitude\": <decimal degrees>} for the \
approximate centre of that place. Do not add any other text.";

pub struct LlmCoordinateResolver {
    provider: Arc<dyn ChatProvider>,
}

impl LlmCoordinateResolver {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl CoordinateResolver for LlmCoordinateResolver {
    async fn locate(&self, region: &str) -> Result<Coordinates, ProviderError> {
        let request = ChatRequest::new(SYSTEM_PROMPT, region).with_max_tokens(64);
        let reply = self.provider.complete(request).await?;
        let coords = parse_coordinates(&reply.content)?;
        debug!(
            region,
            latitude = coords.latitude,
            longitude = coords.longitude,
            "coordinates located"
        );
        Ok(coords)
    }
}

#[derive(Debug, Deserialize)]
struct CoordinateReply {
    latitude: f64,
    longitude: f64,
}

/// Reads the first JSON object in `reply`, tolerating surrounding prose or code fences.
pub fn parse_coordinates(reply: &str) -> Result<Coordinates, ProviderError> {
    let (Some(start), Some(end)) = (reply.find('{'), reply.rfind('}')) else {
        return Err(ProviderError::InvalidResponse(
            "no JSON object in geocoder reply".to_string(),
        ));
    };
    let body = reply.get(start..=end).unwrap_or_default();
    let parsed: CoordinateReply = serde_json::from_str(body)?;

    let coords = Coordinates::new(parsed.latitude, parsed.longitude);
    if !coords.is_valid() {
        return Err(ProviderError::InvalidResponse(format!(
            "coordinates out of range: latitude={}, longitude={}",
            parsed.latitude, parsed.longitude
        )));
    }
    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_json_parses() {
        let coords = parse_coordinates(r#"{"latitude": 6.5244, "longitude": 3.3792}"#)
            .expect("coordinates");
        assert_eq!(coords, Coordinates::new(6.5244, 3.3792));
    }

    #[test]
    fn fenced_json_parses() {
        let reply = "```json\n{\"latitude\": -27.47, \"longitude\": 153.03}\n```";
        let coords = parse_coordinates(reply).expect("coordinates");
        assert_eq!(coords.latitude, -27.47);
        assert_eq!(coords.longitude, 153.03);
    }

    #[test]
    fn prose_without_json_is_rejected() {
        let err = parse_coordinates("Lagos is at roughly 6.5N 3.4E").expect_err("no json");
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[test]
    fn missing_field_is_rejected() {
        let err = parse_coordinates(r#"{"latitude": 10.0}"#).expect_err("missing lon");
        assert!(matches!(err, ProviderError::Serde(_)));
    }

    #[test]
    fn out_of_range_is_rejected() {
        let err =
            parse_coordinates(r#"{"latitude": 123.0, "longitude": 3.0}"#).expect_err("range");
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }

    #[test]
    fn reversed_braces_are_rejected() {
        assert!(parse_coordinates("} nothing {").is_err());
    }
}
