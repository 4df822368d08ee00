// Player pool snapshot loading.
//
// The engine itself only ever sees in-memory record slices; this module is
// the host-side boundary that reads a JSON pool snapshot (batters and
// pitchers in one document) into typed records. String codes parse during
// deserialization, so a snapshot with malformed balance or endurance codes
// still loads; the codes degrade to neutral per the record-boundary rules.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::player::record::{Batter, Pitcher};

/// A full player pool snapshot: the engine's input universe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerPool {
    #[serde(default)]
    pub batters: Vec<Batter>,
    #[serde(default)]
    pub pitchers: Vec<Pitcher>,
}

impl PlayerPool {
    pub fn len(&self) -> usize {
        self.batters.len() + self.pitchers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batters.is_empty() && self.pitchers.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error("failed to read pool file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse pool file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Load a pool snapshot from a JSON file.
pub fn load_pool(path: &Path) -> Result<PlayerPool, PoolError> {
    let display_path = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| PoolError::Io {
        path: display_path.clone(),
        source,
    })?;
    let pool: PlayerPool = serde_json::from_str(&content).map_err(|source| PoolError::Parse {
        path: display_path.clone(),
        source,
    })?;
    info!(
        path = %display_path,
        batters = pool.batters.len(),
        pitchers = pool.pitchers.len(),
        "loaded player pool"
    );
    Ok(pool)
}
