use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::EmbeddingError;

/// Default embedding endpoint.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Async interface over the external embedding model.
///
/// Implementations return one fixed-length vector per call; callers impose
/// their own deadlines around the network request.
pub trait Embedder: Send + Sync {
    /// Embeds one canonical text blob.
    fn embed(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<Vec<f32>, EmbeddingError>> + Send;

    /// Vector length every successful [`Embedder::embed`] call returns.
    fn dim(&self) -> usize;
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

/// OpenAI-compatible embedding client.
pub struct OpenAiEmbedder {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
    dim: usize,
}

impl OpenAiEmbedder {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, dim: usize) -> Self {
        Self::with_api_base(DEFAULT_API_BASE, api_key, model, dim)
    }

    /// Points the client at a non-default endpoint (proxies, self-hosted
    /// OpenAI-compatible servers).
    pub fn with_api_base(
        api_base: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        dim: usize,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.into(),
            api_key: api_key.into(),
            model: model.into(),
            dim,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let url = format!("{}/embeddings", self.api_base);
        let body = EmbeddingRequest {
            model: &self.model,
            input: text,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: EmbeddingResponse = response.json().await?;
        let vector = parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or(EmbeddingError::EmptyResponse)?;

        if vector.len() != self.dim {
            return Err(EmbeddingError::InvalidDimension {
                expected: self.dim,
                actual: vector.len(),
            });
        }

        debug!(model = %self.model, text_len = text.len(), "embedded text");
        Ok(vector)
    }

    fn dim(&self) -> usize {
        self.dim
    }
}

/// Deterministic offline embedder for tests: hashes the text into a
/// unit-normalized vector, so identical texts map to identical vectors.
#[cfg(any(test, feature = "mock"))]
pub struct MockEmbedder {
    dim: usize,
}

#[cfg(any(test, feature = "mock"))]
impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self { dim }
    }
}

#[cfg(any(test, feature = "mock"))]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut vector = Vec::with_capacity(self.dim);
        let mut state = 0u64;
        for i in 0..self.dim {
            let mut hasher = DefaultHasher::new();
            text.hash(&mut hasher);
            i.hash(&mut hasher);
            state.hash(&mut hasher);
            state = hasher.finish();
            // Map the hash onto [-1, 1].
            vector.push((state as f64 / u64::MAX as f64 * 2.0 - 1.0) as f32);
        }

        let norm: f32 = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }

        Ok(vector)
    }

    fn dim(&self) -> usize {
        self.dim
    }
}
