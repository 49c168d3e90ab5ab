//! Cosine-similarity ranking of the job corpus against one résumé.
//!
//! Corpus descriptions are cleaned and embedded once at construction; only
//! the incoming résumé is encoded per request.

use std::cmp::Ordering;
use std::sync::Arc;

use anyhow::{ensure, Context, Result};
use serde::Serialize;
use tracing::error;

use crate::corpus::JobCorpus;
use crate::embedding::EmbeddingEngine;
use crate::text::clean_text;

/// Default number of matches returned by the endpoint.
pub const DEFAULT_TOP_N: usize = 3;

/// Qualitative band for a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Remark {
    Excellent,
    Average,
    Low,
}

impl Remark {
    /// Band for a percentage score: ≥75 Excellent, ≥50 Average, else Low.
    pub fn for_score(score: f32) -> Self {
        if score >= 75.0 {
            Remark::Excellent
        } else if score >= 50.0 {
            Remark::Average
        } else {
            Remark::Low
        }
    }
}

/// One ranked corpus entry in the response.
#[derive(Debug, Clone, Serialize)]
pub struct JobMatch {
    pub rank: usize,
    pub job_title: String,
    /// Percentage score in [0, 100], formatted to two decimals.
    pub score: String,
    pub remark: Remark,
}

struct JobEmbedding {
    title: String,
    vector: Vec<f32>,
}

pub struct Matcher {
    engine: Arc<dyn EmbeddingEngine>,
    jobs: Vec<JobEmbedding>,
}

impl Matcher {
    /// Cleans and embeds every corpus description. A corpus embedding
    /// failure here is fatal: without corpus vectors no request can be
    /// served, so startup aborts.
    pub fn new(corpus: &JobCorpus, engine: Arc<dyn EmbeddingEngine>) -> Result<Self> {
        let cleaned: Vec<String> = corpus
            .postings()
            .iter()
            .map(|p| clean_text(&p.description))
            .collect();
        let vectors = engine
            .encode_batch(&cleaned)
            .context("failed to embed job corpus")?;
        ensure!(
            vectors.len() == corpus.len(),
            "embedding engine returned {} vectors for {} job descriptions",
            vectors.len(),
            corpus.len()
        );

        let jobs = corpus
            .postings()
            .iter()
            .zip(vectors)
            .map(|(posting, vector)| JobEmbedding {
                title: posting.title.clone(),
                vector,
            })
            .collect();

        Ok(Self { engine, jobs })
    }

    /// Ranks the corpus against cleaned résumé text.
    ///
    /// Scores are cosine similarity × 100, clamped to [0, 100], sorted
    /// descending with ties kept in corpus order, truncated to `top_n`.
    /// If résumé encoding fails the failure is logged and an empty list
    /// returned; the endpoint surfaces that as zero matches.
    pub fn top_matches(&self, resume_text: &str, top_n: usize) -> Vec<JobMatch> {
        let resume_vector = match self.engine.encode(resume_text) {
            Ok(vector) => vector,
            Err(e) => {
                error!("failed to embed resume text: {e:#}");
                return Vec::new();
            }
        };

        let mut scored: Vec<(&JobEmbedding, f32)> = self
            .jobs
            .iter()
            .map(|job| {
                let score =
                    (cosine_similarity(&resume_vector, &job.vector) * 100.0).clamp(0.0, 100.0);
                (job, score)
            })
            .collect();
        // Stable sort: equal scores keep corpus order.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        scored
            .into_iter()
            .take(top_n)
            .enumerate()
            .map(|(i, (job, score))| JobMatch {
                rank: i + 1,
                job_title: job.title.clone(),
                score: format!("{score:.2}"),
                remark: Remark::for_score(score),
            })
            .collect()
    }
}

fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let len = a.len().min(b.len());
    if len == 0 {
        return 0.0;
    }
    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;
    for i in 0..len {
        dot += a[i] * b[i];
        norm_a += a[i] * a[i];
        norm_b += b[i] * b[i];
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom > 0.0 {
        dot / denom
    } else {
        0.0
    }
}
