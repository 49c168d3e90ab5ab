//! Production embedding engine: all-MiniLM-L6-v2 via fastembed (ONNX).

use anyhow::{anyhow, Result};
use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use super::EmbeddingEngine;

const MODEL_NAME: &str = "all-MiniLM-L6-v2";
const MODEL_DIMENSION: usize = 384;

/// Wraps a fastembed `TextEmbedding` session. Loading downloads and
/// initializes the model, so construct exactly once at startup and share
/// via `Arc`. The session is read-only afterwards; `encode` takes `&self`.
pub struct MiniLmEngine {
    model: TextEmbedding,
}

impl MiniLmEngine {
    pub fn new() -> Result<Self> {
        let model = TextEmbedding::try_new(
            InitOptions::new(EmbeddingModel::AllMiniLML6V2).with_show_download_progress(false),
        )?;
        Ok(Self { model })
    }
}

impl EmbeddingEngine for MiniLmEngine {
    fn encode(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.model.embed(vec![text], None)?;
        vectors
            .pop()
            .ok_or_else(|| anyhow!("model returned no embedding"))
    }

    fn encode_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let vectors = self.model.embed(texts.to_vec(), None)?;
        Ok(vectors)
    }

    fn dimension(&self) -> usize {
        MODEL_DIMENSION
    }

    fn model_name(&self) -> &str {
        MODEL_NAME
    }
}
