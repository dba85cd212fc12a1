//! Mock provider implementation for testing.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// What the mock answers with.
#[derive(Debug, Clone)]
enum MockReply {
    Response(ProviderResponse),
    Network(String),
    RateLimited,
    NotConfigured,
}

/// Mock text provider for testing.
///
/// Returns the same canned reply on every call and records the prompts and
/// parameters it was given.
pub struct MockTextProvider {
    reply: MockReply,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, GenerationParams)>>,
}

impl MockTextProvider {
    fn with_reply(reply: MockReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Always succeed with `response`.
    pub fn responding(response: ProviderResponse) -> Self {
        Self::with_reply(MockReply::Response(response))
    }

    /// Always succeed with a plain text body and no grounding.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::responding(ProviderResponse {
            text: Some(text.into()),
            ..Default::default()
        })
    }

    /// Always fail as if the network call broke.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_reply(MockReply::Network(message.into()))
    }

    /// Always fail with a 429-style rejection.
    pub fn rate_limited() -> Self {
        Self::with_reply(MockReply::RateLimited)
    }

    /// Behave like a provider with no credentials.
    pub fn unconfigured() -> Self {
        Self::with_reply(MockReply::NotConfigured)
    }

    /// Number of `generate` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompt and parameters of the most recent `generate` call.
    pub fn last_request(&self) -> Option<(String, GenerationParams)> {
        self.last_request
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_request.lock() {
            *last = Some((prompt.to_string(), params.clone()));
        }

        match &self.reply {
            MockReply::Response(response) => Ok(response.clone()),
            MockReply::Network(message) => Err(ProviderError::NetworkError(message.clone())),
            MockReply::RateLimited => Err(ProviderError::RateLimited),
            MockReply::NotConfigured => Err(ProviderError::NotConfigured(
                "Mock text provider not configured".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match &self.reply {
            MockReply::NotConfigured => Err(ProviderError::NotConfigured(
                "Mock text provider not configured".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
