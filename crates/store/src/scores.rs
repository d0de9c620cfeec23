use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use threez_core::{HighScoreStore, StoreError};
use tracing::debug;

/// On-disk layout. Keys other than the high score are kept as-is so the
/// file can be shared with other settings.
#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoreDocument {
    #[serde(default, alias = "highScore", skip_serializing_if = "Option::is_none")]
    hiscore: Option<i64>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

pub fn default_store_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("THREEZ_SCORES") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".threez_scores.json"))
}

#[derive(Debug, Clone)]
pub struct JsonHighScoreStore {
    path: PathBuf,
}

impl JsonHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Option<ScoreDocument>, StoreError> {
        let body = match fs::read_to_string(&self.path) {
            Ok(body) => body,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(StoreError::Read(err.to_string())),
        };
        let document =
            serde_json::from_str(&body).map_err(|err| StoreError::Parse(err.to_string()))?;
        Ok(Some(document))
    }
}

impl HighScoreStore for JsonHighScoreStore {
    fn load(&mut self) -> Result<Option<i64>, StoreError> {
        Ok(self.read_document()?.and_then(|document| document.hiscore))
    }

    fn save(&mut self, high_score: i64) -> Result<(), StoreError> {
        // A corrupt document is replaced; one we cannot read is left alone.
        let mut document = match self.read_document() {
            Ok(document) => document.unwrap_or_default(),
            Err(StoreError::Parse(reason)) => {
                debug!(path = %self.path.display(), %reason, "replacing corrupt score file");
                ScoreDocument::default()
            }
            Err(err) => return Err(err),
        };
        document.hiscore = Some(high_score);

        let mut body = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut body, formatter);
        document
            .serialize(&mut serializer)
            .map_err(|err| StoreError::Write(err.to_string()))?;
        fs::write(&self.path, body).map_err(|err| StoreError::Write(err.to_string()))?;
        debug!(path = %self.path.display(), high_score, "high score saved");
        Ok(())
    }
}
