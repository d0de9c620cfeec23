use std::fs;
use std::path::Path;
use thiserror::Error;
use threez_core::{ConfigError, GameConfig};

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("read {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("parse {path}: {reason}")]
    Parse { path: String, reason: String },
    #[error("invalid config: {0}")]
    Invalid(#[from] ConfigError),
}

/// Reads a JSON game config. Missing keys fall back to the classic game.
pub fn load_game_config(path: &Path) -> Result<GameConfig, ConfigLoadError> {
    let origin = path.display().to_string();
    let body = fs::read_to_string(path).map_err(|err| ConfigLoadError::Read {
        path: origin.clone(),
        reason: err.to_string(),
    })?;
    parse_from(&body, origin)
}

pub fn parse_game_config(body: &str) -> Result<GameConfig, ConfigLoadError> {
    parse_from(body, "<inline>".to_string())
}

fn parse_from(body: &str, origin: String) -> Result<GameConfig, ConfigLoadError> {
    let config: GameConfig = serde_json::from_str(body).map_err(|err| ConfigLoadError::Parse {
        path: origin,
        reason: err.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}
