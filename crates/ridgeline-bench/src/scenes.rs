use ridgeline_core::config::TerrainConfig;
use ridgeline_core::constants::{DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS};

/// Seed used by every standard scene so timings compare like for like.
pub const BENCH_SEED: i32 = 42;

/// Configuration for a single benchmark scene.
pub struct SceneConfig {
    pub name: String,
    pub terrain: TerrainConfig,
}

/// Return the standard suite of scenes, from a small grid up to the largest
/// u16-indexable one.
pub fn standard_scenes(seed: i32) -> Vec<SceneConfig> {
    [
        ("32x32", 32, 32),
        ("100x100", 100, 100),
        ("demo", DEFAULT_GRID_ROWS, DEFAULT_GRID_COLS),
        ("255x255", 255, 255),
    ]
    .into_iter()
    .map(|(name, rows, cols)| SceneConfig {
        name: name.to_string(),
        terrain: TerrainConfig {
            seed: Some(seed),
            rows,
            cols,
            ..TerrainConfig::default()
        },
    })
    .collect()
}

/// Single scene built from a user-supplied config.
pub fn custom_scene(terrain: TerrainConfig) -> SceneConfig {
    SceneConfig {
        name: format!("custom-{}x{}", terrain.rows, terrain.cols),
        terrain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scenes_are_valid() {
        let scenes = standard_scenes(BENCH_SEED);
        assert_eq!(scenes.len(), 4);
        for scene in &scenes {
            assert!(scene.terrain.validate().is_ok(), "{}", scene.name);
            assert_eq!(scene.terrain.seed, Some(BENCH_SEED));
        }
    }

    #[test]
    fn test_custom_scene_name() {
        let scene = custom_scene(TerrainConfig {
            rows: 3,
            cols: 7,
            ..TerrainConfig::default()
        });
        assert_eq!(scene.name, "custom-3x7");
    }
}
