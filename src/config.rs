use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub data_path: PathBuf,
    pub static_dir: PathBuf,
    pub upload_dir: PathBuf,
    pub model_path: PathBuf,
    pub max_upload_bytes: u64,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            max_workers: 8,
            data_path: PathBuf::from("data/properties.json"),
            static_dir: PathBuf::from("static"),
            upload_dir: PathBuf::from("static/images"),
            model_path: PathBuf::from("models/price_model.json"),
            max_upload_bytes: 16 * 1024 * 1024,
            gemini_api_key: None,
            gemini_model: "gemini-2.5-flash".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();
        let defaults = Self::default();

        Ok(Self {
            bind_addr: match env::var("BIND_ADDR") {
                Ok(v) => v.parse().context("BIND_ADDR must be host:port")?,
                Err(_) => defaults.bind_addr,
            },
            max_workers: match env::var("MAX_WORKERS") {
                Ok(v) => v.parse().context("MAX_WORKERS must be a valid number")?,
                Err(_) => defaults.max_workers,
            },
            data_path: env::var("DATA_PATH").map(PathBuf::from).unwrap_or(defaults.data_path),
            static_dir: env::var("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            upload_dir: env::var("UPLOAD_DIR").map(PathBuf::from).unwrap_or(defaults.upload_dir),
            model_path: env::var("MODEL_PATH").map(PathBuf::from).unwrap_or(defaults.model_path),
            max_upload_bytes: match env::var("MAX_UPLOAD_BYTES") {
                Ok(v) => v.parse().context("MAX_UPLOAD_BYTES must be a valid number")?,
                Err(_) => defaults.max_upload_bytes,
            },
            gemini_api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.trim().is_empty()),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
        })
    }
}
