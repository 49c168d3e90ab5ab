use std::sync::Arc;

use crate::config::Config;
use crate::corpus::JobCorpus;
use crate::matcher::Matcher;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only after startup, so concurrent
/// requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub corpus: Arc<JobCorpus>,
    /// Holds the embedding engine and the precomputed corpus vectors.
    pub matcher: Arc<Matcher>,
}
