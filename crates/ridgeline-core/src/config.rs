use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_DEPTH, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_HEIGHT_ZOOM, DEFAULT_ORIGIN,
    DEFAULT_WIDTH,
};
use crate::error::RidgelineError;
use crate::rng::XorShiftRng;
use crate::types::MeshConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse terrain config RON: {0}")]
    Parse(String),
    #[error("Invalid terrain config: {0}")]
    Invalid(#[from] RidgelineError),
}

/// Terrain description loaded from RON. Missing fields take the mountains demo values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    /// Fixed PRNG seed, or `None` for a random one.
    pub seed: Option<i32>,
    pub rows: u32,
    pub cols: u32,
    pub origin: [f32; 3],
    pub width: f32,
    pub depth: f32,
    pub height_zoom: f64,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rows: DEFAULT_GRID_ROWS,
            cols: DEFAULT_GRID_COLS,
            origin: DEFAULT_ORIGIN,
            width: DEFAULT_WIDTH,
            depth: DEFAULT_DEPTH,
            height_zoom: DEFAULT_HEIGHT_ZOOM,
        }
    }
}

impl TerrainConfig {
    /// Build the validated mesh descriptor.
    pub fn mesh(&self) -> Result<MeshConfig, RidgelineError> {
        MeshConfig::new(self.rows, self.cols)?
            .with_origin(self.origin)?
            .with_size(self.width, self.depth)
    }

    /// Build the PRNG this config describes.
    pub fn rng(&self) -> Result<XorShiftRng, RidgelineError> {
        match self.seed {
            Some(seed) => XorShiftRng::with_seed(seed),
            None => Ok(XorShiftRng::with_random_seed()),
        }
    }

    /// Check every field without building anything.
    pub fn validate(&self) -> Result<(), RidgelineError> {
        self.mesh()?;
        if self.seed == Some(0) {
            return Err(RidgelineError::InvalidSeed("seed must be non-zero".into()));
        }
        if !self.height_zoom.is_finite() || self.height_zoom <= 0.0 {
            return Err(RidgelineError::InvalidZoom(self.height_zoom));
        }
        Ok(())
    }
}

/// Parse and validate a terrain config from a RON string.
pub fn load_config_from_str(ron_str: &str) -> Result<TerrainConfig, ConfigError> {
    let options = ron::Options::default();
    let config: TerrainConfig = options
        .from_str(ron_str)
        .map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    log::debug!(
        "Loaded terrain config: {}x{} grid, seed {:?}",
        config.rows,
        config.cols,
        config.seed
    );
    Ok(config)
}
