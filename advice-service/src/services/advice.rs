//! Fetches naturopathy advice for a profile.
//!
//! [`AdviceClient`] owns no global state: the backend is injected at
//! construction, every call makes exactly one backend request, and the raw
//! reply is normalized into a [`HealthResponse`] by [`normalize_response`].

use crate::models::{GroundingSource, HealthResponse, UserProfile};
use crate::services::prompt::build_prompt;
use crate::services::providers::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use std::sync::Arc;
use thiserror::Error;

/// Sampling temperature for advice generation.
pub const ADVICE_TEMPERATURE: f32 = 0.7;

/// Markdown returned when the backend produced no text.
pub const EMPTY_RESPONSE_FALLBACK: &str = "No response generated. Please try again.";

/// The only error callers ever see. The underlying cause is logged, never
/// carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Failed to get health advice. Please check your connection and try again.")]
pub struct AdviceError;

#[derive(Clone)]
pub struct AdviceClient {
    provider: Arc<dyn TextProvider>,
    params: GenerationParams,
}

impl AdviceClient {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self {
            provider,
            params: GenerationParams {
                temperature: Some(ADVICE_TEMPERATURE),
                enable_web_search: true,
            },
        }
    }

    /// Ask the backend for advice on `profile`.
    ///
    /// Any backend failure becomes [`AdviceError`]. There is no retry.
    pub async fn fetch_advice(
        &self,
        profile: &UserProfile,
    ) -> Result<HealthResponse, AdviceError> {
        let prompt = build_prompt(profile);

        tracing::info!(
            language = %profile.language,
            prompt_len = prompt.len(),
            "Requesting health advice"
        );

        let response = self
            .provider
            .generate(&prompt, &self.params)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Health advice request failed");
                AdviceError
            })?;

        tracing::info!(
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            finish_reason = ?response.finish_reason,
            "Health advice received"
        );

        let advice = normalize_response(response);
        tracing::debug!(
            markdown_len = advice.markdown.len(),
            source_count = advice.sources.len(),
            "Normalized health advice"
        );

        Ok(advice)
    }

    /// Check that the backend is configured and reachable.
    pub async fn health_check(&self) -> Result<(), ProviderError> {
        self.provider.health_check().await
    }
}

/// Map a raw provider reply onto the shape the caller renders.
///
/// Missing or empty text becomes [`EMPTY_RESPONSE_FALLBACK`]. Only grounding
/// chunks with a web reference become sources, in their original order.
pub fn normalize_response(response: ProviderResponse) -> HealthResponse {
    let markdown = response
        .text
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| EMPTY_RESPONSE_FALLBACK.to_string());

    let sources = response
        .grounding
        .and_then(|grounding| grounding.grounding_chunks)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|chunk| chunk.web)
        .map(|web| GroundingSource {
            title: web.title.unwrap_or_default(),
            uri: web.uri.unwrap_or_default(),
        })
        .collect();

    HealthResponse { markdown, sources }
}
