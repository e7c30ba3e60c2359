//! World generation parameters stored as JSON

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::world::{World, DEFAULT_SEED};
use crate::core::{Error, Result};

/// Default generation radius in chunks
pub const DEFAULT_RADIUS_IN_CHUNKS: i32 = 8;
/// Largest radius a config may request
pub const MAX_RADIUS_IN_CHUNKS: i32 = 64;

/// Parameters for [`World::generate`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub radius_in_chunks: i32,
    pub seed: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            radius_in_chunks: DEFAULT_RADIUS_IN_CHUNKS,
            seed: DEFAULT_SEED,
        }
    }
}

impl WorldConfig {
    /// Read and validate a config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: WorldConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_RADIUS_IN_CHUNKS).contains(&self.radius_in_chunks) {
            return Err(Error::Config(format!(
                "radius_in_chunks must be in 1..={}, got {}",
                MAX_RADIUS_IN_CHUNKS, self.radius_in_chunks
            )));
        }
        Ok(())
    }
}

impl World {
    /// Create a world and generate it from `config`
    pub fn from_config(config: &WorldConfig) -> Self {
        let mut world = World::new();
        world.generate(config.radius_in_chunks, config.seed);
        world
    }
}
