use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::ProviderError;
use crate::traits::{ChatProvider, RegionResolver};
use crate::types::ChatRequest;

const UNKNOWN_MARKER: &str = "UNKNOWN";

const SYSTEM_PROMPT: &str = "You standardize place names. Reply with exactly one line containing \
the canonical name of the place the user refers to, formatted as \"City, Country\" or \
\"Region, Country\". Correct spelling and expand abbreviations. If the input is not a \
recognizable place, reply with UNKNOWN. Do not add any other text.";

pub struct LlmRegionResolver {
    provider: Arc<dyn ChatProvider>,
}

impl LlmRegionResolver {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl RegionResolver for LlmRegionResolver {
    async fn resolve(&self, free_text: &str) -> Result<String, ProviderError> {
        let request = ChatRequest::new(SYSTEM_PROMPT, free_text).with_max_tokens(32);
        let reply = self.provider.complete(request).await?;
        let region = parse_region_reply(&reply.content)?;
        debug!(input = free_text, region = %region, provider = %reply.provider, "region resolved");
        Ok(region)
    }
}

/// Extracts the canonical name from a resolver reply.
pub fn parse_region_reply(reply: &str) -> Result<String, ProviderError> {
    let line = reply
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or_default();
    let name = line
        .trim_matches(|c: char| c == '"' || c == '\'' || c == '*' || c == '`')
        .trim_end_matches('.')
        .trim();

    if name.is_empty() || name.eq_ignore_ascii_case(UNKNOWN_MARKER) {
        return Err(ProviderError::InvalidResponse(
            "no canonical region name could be determined".to_string(),
        ));
    }
    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatResponse;

    struct CannedChat(&'static str);

    #[async_trait]
    impl ChatProvider for CannedChat {
        fn name(&self) -> &'static str {
            "canned"
        }

        async fn complete(&self, _request: ChatRequest) -> Result<ChatResponse, ProviderError> {
            Ok(ChatResponse {
                provider: self.name().to_string(),
                model: "test".to_string(),
                content: self.0.to_string(),
                usage_tokens: None,
            })
        }
    }

    #[test]
    fn reply_is_cleaned() {
        assert_eq!(
            parse_region_reply("  \"Lagos, Nigeria\".\n").expect("name"),
            "Lagos, Nigeria"
        );
        assert_eq!(
            parse_region_reply("\n**Queensland, Australia**").expect("name"),
            "Queensland, Australia"
        );
    }

    #[test]
    fn unknown_and_blank_are_errors() {
        assert!(parse_region_reply("UNKNOWN").is_err());
        assert!(parse_region_reply("unknown.").is_err());
        assert!(parse_region_reply("   \n ").is_err());
    }

    #[tokio::test]
    async fn resolver_uses_provider_reply() {
        let resolver = LlmRegionResolver::new(Arc::new(CannedChat("Ho Chi Minh City, Vietnam")));
        let region = resolver.resolve("saigon").await.expect("resolved");
        assert_eq!(region, "Ho Chi Minh City, Vietnam");
    }

    #[tokio::test]
    async fn resolver_surfaces_unknown() {
        let resolver = LlmRegionResolver::new(Arc::new(CannedChat("UNKNOWN")));
        let err = resolver.resolve("asdfgh").await.expect_err("unresolvable");
        assert!(matches!(err, ProviderError::InvalidResponse(_)));
    }
}
