use std::sync::Arc;

use crate::config::ChatProviderConfig;
use crate::error::ProviderError;
use crate::providers::OpenAiCompatibleChatProvider;
use crate::traits::ChatProvider;

pub fn build_chat_provider(cfg: ChatProviderConfig) -> Result<Arc<dyn ChatProvider>, ProviderError> {
    match cfg {
        ChatProviderConfig::OpenAiCompatible(c) => {
            Ok(Arc::new(OpenAiCompatibleChatProvider::new(c)?))
        }
    }
}
