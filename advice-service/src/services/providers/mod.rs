//! AI provider abstractions and implementations.
//!
//! The advice client talks to its backend only through [`TextProvider`], so
//! the Gemini implementation can be swapped for [`mock::MockTextProvider`]
//! in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Raw reply from a provider, before it is turned into advice.
///
/// Every nested field the backend may leave out is an `Option`, so an
/// absent field and an empty one stay distinguishable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderResponse {
    /// Generated text, if the backend produced any.
    pub text: Option<String>,

    /// Grounding metadata of the first candidate.
    pub grounding: Option<GroundingMetadata>,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    /// Finish reason.
    pub finish_reason: FinishReason,
}

/// Citations attached to a candidate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundingMetadata {
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
}

/// One retrieved item. Only web results carry a [`WebReference`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroundingChunk {
    pub web: Option<WebReference>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WebReference {
    pub title: Option<String>,
    pub uri: Option<String>,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FinishReason {
    #[default]
    Complete,
    Length,
    ContentFilter,
    Other,
}

impl FinishReason {
    /// Map a Gemini `finishReason` value.
    pub fn from_api(reason: Option<&str>) -> Self {
        match reason {
            None | Some("STOP") => FinishReason::Complete,
            Some("MAX_TOKENS") => FinishReason::Length,
            Some("SAFETY" | "RECITATION" | "BLOCKLIST" | "PROHIBITED_CONTENT") => {
                FinishReason::ContentFilter
            }
            Some(_) => FinishReason::Other,
        }
    }
}

/// Generation parameters for AI requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationParams {
    /// Temperature (0.0 - 2.0).
    pub temperature: Option<f32>,

    /// Let the model run web searches and cite what it finds.
    pub enable_web_search: bool,
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a single, non-streamed response.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
