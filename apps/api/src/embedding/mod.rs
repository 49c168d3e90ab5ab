//! Sentence embedding behind a swappable trait.
//!
//! Production runs [`MiniLmEngine`] (fastembed / ONNX). `AppState` and the
//! matcher only see `Arc<dyn EmbeddingEngine>`, so tests substitute a
//! deterministic stub without touching the model.

mod minilm;

pub use minilm::MiniLmEngine;

use anyhow::Result;

/// A loaded sentence-embedding model. Implementations must be read-only
/// after construction so one instance can serve concurrent requests.
pub trait EmbeddingEngine: Send + Sync {
    /// Embeds a single text into a fixed-length vector.
    fn encode(&self, text: &str) -> Result<Vec<f32>>;

    /// Embeds a batch of texts, one vector per input, in input order.
    fn encode_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embedding dimensionality of the loaded model.
    fn dimension(&self) -> usize;

    /// Human-readable model identifier, for startup logging.
    fn model_name(&self) -> &str;
}
