//! The job corpus: static (title, description) pairs matched against every
//! uploaded résumé. Loaded once at startup and read-only afterwards.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
}

/// Immutable, ordered collection of job postings. Titles are unique;
/// iteration order is the order of the source file, which also decides
/// ranking ties.
#[derive(Debug)]
pub struct JobCorpus {
    postings: Vec<JobPosting>,
}

impl JobCorpus {
    /// Loads the corpus from a JSON array of `{title, description}` objects.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read job corpus from {}", path.display()))?;
        let postings: Vec<JobPosting> = serde_json::from_str(&raw)
            .with_context(|| format!("invalid job corpus JSON in {}", path.display()))?;
        Self::from_postings(postings)
    }

    pub fn from_postings(postings: Vec<JobPosting>) -> Result<Self> {
        let mut seen = HashSet::new();
        for posting in &postings {
            if !seen.insert(posting.title.as_str()) {
                bail!("duplicate job title in corpus: {:?}", posting.title);
            }
        }
        Ok(Self { postings })
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(title: &str, description: &str) -> JobPosting {
        JobPosting {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn preserves_source_order() {
        let corpus = JobCorpus::from_postings(vec![
            posting("Zookeeper", "animals"),
            posting("Accountant", "ledgers"),
        ])
        .unwrap();
        let titles: Vec<_> = corpus.postings().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["Zookeeper", "Accountant"]);
    }

    #[test]
    fn rejects_duplicate_titles() {
        let err = JobCorpus::from_postings(vec![
            posting("Chef", "cooking"),
            posting("Chef", "more cooking"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("duplicate job title"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(JobCorpus::load(Path::new("no/such/jobs.json")).is_err());
    }

    #[test]
    fn parses_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        std::fs::write(
            &path,
            r#"[{"title": "Chef", "description": "cooking recipes kitchen management"}]"#,
        )
        .unwrap();
        let corpus = JobCorpus::load(&path).unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.postings()[0].title, "Chef");
    }
}
