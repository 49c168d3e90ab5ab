//! PDF text extraction for uploaded résumés.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Extraction failure. Read and parse failures are distinguished for
/// logging; the HTTP layer reports both as a single "unable to extract"
/// client error.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse PDF {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: pdf_extract::OutputError,
    },
}

/// Extracts the raw text content of a PDF file on disk.
///
/// Returns the text as-is; callers normalize it via [`crate::text::clean_text`].
/// A PDF with no text content yields `Ok` with an empty string.
pub fn extract_resume_text(path: &Path) -> Result<String, ExtractError> {
    let bytes = std::fs::read(path).map_err(|source| ExtractError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    pdf_extract::extract_text_from_mem(&bytes).map_err(|source| ExtractError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_a_read_error() {
        let err = extract_resume_text(Path::new("does/not/exist.pdf")).unwrap_err();
        assert!(matches!(err, ExtractError::Read { .. }));
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"this is definitely not a pdf").unwrap();
        let err = extract_resume_text(file.path()).unwrap_err();
        assert!(matches!(err, ExtractError::Parse { .. }));
    }
}
