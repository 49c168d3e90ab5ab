use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every key has a default so the binary starts with no environment at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Directory where uploaded résumés are staged for extraction.
    pub upload_dir: PathBuf,
    /// JSON file holding the job corpus (array of title/description objects).
    pub jobs_path: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            upload_dir: env_or("UPLOAD_DIR", "uploads").into(),
            jobs_path: env_or("JOBS_PATH", "data/jobs.json").into(),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
