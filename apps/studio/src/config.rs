use std::path::PathBuf;

use anyhow::Result;

/// Application configuration loaded from environment variables.
/// Every variable is optional — the app starts with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the exported PDF is written to.
    pub output_dir: PathBuf,
    /// HTML-to-PDF converter binary.
    pub converter_bin: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            output_dir: PathBuf::from(env_or("RESUME_OUTPUT_DIR", ".")),
            converter_bin: env_or("HTML_TO_PDF_BIN", "wkhtmltopdf"),
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
