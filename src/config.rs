use crate::error::{AppError, Result};

pub const FIDE_BASE_URL: &str = "https://ratings.fide.com";
pub const DEFAULT_ROSTER_PATH: &str = "ratings.txt";
pub const DEFAULT_CACHE_PATH: &str = "fide_ratings_cache.json";

/// Per-request timeout on profile fetches (seconds). This is the only
/// timeout layer; the pipeline adds none of its own.
pub const FETCH_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub fide_base_url: String,
    /// File of whitespace-separated FIDE IDs to track (ROSTER_PATH)
    pub roster_path: String,
    /// Snapshot file holding the last fetched batch (CACHE_PATH)
    pub cache_path: String,
    pub log_level: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            fide_base_url: std::env::var("FIDE_BASE_URL")
                .unwrap_or_else(|_| FIDE_BASE_URL.to_string()),
            roster_path: std::env::var("ROSTER_PATH")
                .unwrap_or_else(|_| DEFAULT_ROSTER_PATH.to_string()),
            cache_path: std::env::var("CACHE_PATH")
                .unwrap_or_else(|_| DEFAULT_CACHE_PATH.to_string()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .map_err(|_| AppError::Config("PORT must be a valid port number".to_string()))?,
        })
    }
}
