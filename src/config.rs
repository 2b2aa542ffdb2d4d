//! Application configuration.
//!
//! Values are resolved with the priority: config.toml > environment > default.

use serde::Deserialize;
use std::path::PathBuf;

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    database: Option<DatabaseConfig>,
    audio: Option<AudioConfig>,
}

#[derive(Debug, Deserialize)]
struct DatabaseConfig {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AudioConfig {
    directory: Option<String>,
}

fn load_config() -> Option<AppConfig> {
    let contents = std::fs::read_to_string("config.toml").ok()?;
    toml::from_str(&contents).ok()
}

/// Load the corpus database path with priority: config.toml > .env > default
pub fn load_database_path() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    if let Some(path) = load_config().and_then(|c| c.database).and_then(|db| db.path) {
        tracing::info!("Using database from config.toml: {}", path);
        return PathBuf::from(path);
    }

    if let Ok(path) = std::env::var("DATABASE_PATH") {
        tracing::info!("Using database from DATABASE_PATH env: {}", path);
        return PathBuf::from(path);
    }

    let default = PathBuf::from("data/taskpool.db");
    tracing::info!("Using default database path: {}", default.display());
    default
}

/// Directory of pre-generated audio files served under /audio
pub fn load_audio_dir() -> PathBuf {
    if let Some(dir) = load_config()
        .and_then(|c| c.audio)
        .and_then(|audio| audio.directory)
    {
        return PathBuf::from(dir);
    }

    if let Ok(dir) = std::env::var("AUDIO_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("audio-generated")
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 58000;

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}
