//! POST /match_resume — the matching endpoint.
//!
//! Accepts a multipart upload in the `resume` field, stages it on disk,
//! extracts and cleans the text, then ranks the job corpus against it.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::extract::extract_resume_text;
use crate::matcher::{JobMatch, DEFAULT_TOP_N};
use crate::state::AppState;
use crate::text::clean_text;
use crate::upload::{discard_upload, store_upload};

#[derive(Debug, Serialize)]
pub struct MatchResumeResponse {
    /// Client-supplied filename, echoed back as metadata only; the stored
    /// copy lives under a generated UUID name.
    pub resume: String,
    pub matches: Vec<JobMatch>,
}

/// Request state machine:
/// no `resume` field → 400; empty filename → 400; filename not `*.pdf`
/// (case-sensitive) → 400; unreadable or textless PDF → 400; otherwise
/// 200 with the top matches. An empty `matches` list is a valid success
/// (corpus empty or résumé embedding failed; the latter is logged).
pub async fn match_resume_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MatchResumeResponse>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("resume") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;
        upload = Some((filename, data.to_vec()));
        break;
    }

    let (filename, data) = upload.ok_or(AppError::MissingFilePart)?;
    if filename.is_empty() {
        return Err(AppError::EmptyFilename);
    }
    if !filename.ends_with(".pdf") {
        return Err(AppError::InvalidFormat);
    }

    let stored = store_upload(&state.config.upload_dir, &data).await?;

    // Extraction and model inference both block; keep them off the reactor.
    let matcher = state.matcher.clone();
    let path = stored.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        let cleaned = match extract_resume_text(&path) {
            Ok(raw) => clean_text(&raw),
            Err(e) => {
                warn!("resume extraction failed: {e:#}");
                String::new()
            }
        };
        if cleaned.is_empty() {
            return Err(AppError::UnreadableResume);
        }
        Ok(matcher.top_matches(&cleaned, DEFAULT_TOP_N))
    })
    .await
    .map_err(|e| AppError::Internal(e.into()));

    // The staged file is single-use; drop it before returning either way.
    discard_upload(&stored).await;

    let matches = outcome??;
    Ok(Json(MatchResumeResponse {
        resume: filename,
        matches,
    }))
}
