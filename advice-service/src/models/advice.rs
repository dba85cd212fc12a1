//! Advice returned to the caller.

use serde::{Deserialize, Serialize};

/// A web page the backend cited while answering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// Markdown advice plus its cited sources, in the order the backend gave them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub markdown: String,
    pub sources: Vec<GroundingSource>,
}
