use std::fmt::Write as _;
use std::sync::Arc;

use async_trait::async_trait;
use mai_core::{DailyRiskIndex, RiskLevel};
use tracing::debug;

use crate::error::ProviderError;
use crate::traits::{ChatProvider, NarrativeGenerator};
use crate::types::ChatRequest;

const SYSTEM_PROMPT: &str = "You are an assistant that specializes in weather analysis and the \
Mosquito Activity Index (MAI). You act as both a weather expert and a public health advisor.";

const FORMAT_RULES: &str = "Response format:
- Use friendly, conversational Markdown. Do not use tables.
- Give a day-by-day MAI forecast labelled Day 1, Day 2, and so on. Do not mention calendar dates.
- For each day include the MAI risk level in bold and a short explanation of why.
- Use '**' for bold, '*' for emphasis, '-' for bullet points and '#' headers only if necessary.
- Close with health and behavioural advice matching the highest risk levels in the window.
- Keep a clear, professional and reassuring tone suitable for a customer service chat.
- Do not change any risk level listed above.";

pub struct LlmNarrativeGenerator {
    provider: Arc<dyn ChatProvider>,
}

impl LlmNarrativeGenerator {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl NarrativeGenerator for LlmNarrativeGenerator {
    async fn summarize(
        &self,
        region: &str,
        index: &DailyRiskIndex,
    ) -> Result<String, ProviderError> {
        let request = ChatRequest::new(SYSTEM_PROMPT, build_prompt(region, index));
        let reply = self.provider.complete(request).await?;
        debug!(
            region,
            model = %reply.model,
            tokens = reply.usage_tokens,
            "narrative generated"
        );
        Ok(reply.content.trim().to_string())
    }
}

/// Renders the computed index into the narrator's user prompt.
pub fn build_prompt(region: &str, index: &DailyRiskIndex) -> String {
    let mut prompt = format!(
        "Region: {region}\n\nThe Mosquito Activity Index has already been computed from the \
         forecast. Explain it to a concerned resident.\n\n"
    );

    for (n, day) in index.iter().enumerate() {
        let _ = writeln!(
            prompt,
            "Day {}: {} (score {}/100)",
            n + 1,
            day.level(),
            day.assessment.normalized_score
        );
    }

    let mut levels: Vec<RiskLevel> = index.iter().map(|d| d.level()).collect();
    levels.sort_unstable_by(|a, b| b.cmp(a));
    levels.dedup();

    prompt.push_str("\nAdvice by risk level:\n");
    for level in levels {
        let _ = writeln!(prompt, "- {level}: {}", level.advice());
    }

    prompt.push('\n');
    prompt.push_str(FORMAT_RULES);
    prompt
}
