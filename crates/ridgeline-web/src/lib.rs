//! Browser surface: hands terrain buffers and noise samples to the JS renderer.
//!
//! `Vec<f32>` / `Vec<u16>` returns arrive in JS as `Float32Array` /
//! `Uint16Array`, ready for `gl.bufferData`.

use std::fmt::Display;

use ridgeline_core::config::{load_config_from_str, ConfigError, TerrainConfig};
use ridgeline_core::rng::XorShiftRng;
use ridgeline_core::types::MeshVariant;
use ridgeline_terrain::buffers::TerrainBuffers;
use ridgeline_terrain::contour::{trace_contour, ContourParams};
use ridgeline_terrain::Terrain;
use wasm_bindgen::prelude::*;

/// WASM entry point. Sets the panic hook and initializes logging.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("logger init failed");
    log::info!("Ridgeline terrain module loaded");
}

fn js_error(e: impl Display) -> JsError {
    log::error!("{e}");
    JsError::new(&e.to_string())
}

/// A seeded terrain plus its displaced-plane buffers, built once.
#[wasm_bindgen]
pub struct TerrainHandle {
    terrain: Terrain,
    plane: TerrainBuffers,
}

impl TerrainHandle {
    fn build(config: &TerrainConfig) -> Result<Self, ConfigError> {
        let terrain = Terrain::from_config(config)?;
        let plane = terrain.build_buffers(MeshVariant::DisplacedPlane3D);
        log::info!(
            "Terrain ready: seed {}, {} vertices",
            terrain.seed(),
            plane.num_vertices()
        );
        Ok(Self { terrain, plane })
    }

    /// Mountains-demo terrain with an optional numeric seed.
    pub fn with_seed(seed: Option<f64>) -> Result<Self, ConfigError> {
        let seed = match seed {
            Some(value) => Some(XorShiftRng::with_numeric_seed(value)?.state()),
            None => None,
        };
        Self::build(&TerrainConfig {
            seed,
            ..TerrainConfig::default()
        })
    }

    pub fn with_config(ron: &str) -> Result<Self, ConfigError> {
        let config = load_config_from_str(ron)?;
        Self::build(&config)
    }

    pub fn buffers(&self) -> &TerrainBuffers {
        &self.plane
    }
}

#[wasm_bindgen]
impl TerrainHandle {
    /// `seed` must be a non-zero integer; omit it for a random terrain.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: Option<f64>) -> Result<TerrainHandle, JsError> {
        Self::with_seed(seed).map_err(js_error)
    }

    /// Build from a RON terrain description.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(ron: &str) -> Result<TerrainHandle, JsError> {
        Self::with_config(ron).map_err(js_error)
    }

    pub fn seed(&self) -> i32 {
        self.terrain.seed()
    }

    /// Displaced plane positions, 3 floats per vertex.
    pub fn positions(&self) -> Vec<f32> {
        self.plane.positions.clone()
    }

    /// Flat 2D grid positions, 2 floats per vertex.
    #[wasm_bindgen(js_name = flatPositions)]
    pub fn flat_positions(&self) -> Vec<f32> {
        self.terrain.vertices(MeshVariant::Flat2D)
    }

    #[wasm_bindgen(js_name = triangleIndices)]
    pub fn triangle_indices(&self) -> Vec<u16> {
        self.plane.triangles.clone()
    }

    #[wasm_bindgen(js_name = lineStripIndices)]
    pub fn line_strip_indices(&self) -> Vec<u16> {
        self.plane.line_strip.clone()
    }

    #[wasm_bindgen(js_name = numVertices)]
    pub fn num_vertices(&self) -> u32 {
        self.terrain.mesh().num_vertices()
    }

    #[wasm_bindgen(js_name = numVertexRows)]
    pub fn num_vertex_rows(&self) -> u32 {
        self.terrain.mesh().num_vertex_rows()
    }

    #[wasm_bindgen(js_name = numVertexCols)]
    pub fn num_vertex_cols(&self) -> u32 {
        self.terrain.mesh().num_vertex_cols()
    }

    #[wasm_bindgen(js_name = triangleNumIndices)]
    pub fn triangle_num_indices(&self) -> u32 {
        self.terrain.mesh().triangle_num_indices()
    }

    #[wasm_bindgen(js_name = lineStripNumIndices)]
    pub fn line_strip_num_indices(&self) -> u32 {
        self.terrain.mesh().line_strip_num_indices()
    }

    pub fn noise(&self, x: f64, y: f64) -> f64 {
        self.terrain.noise().noise(x, y)
    }

    pub fn noise01(&self, x: f64, y: f64) -> f64 {
        self.terrain.noise().noise01(x, y)
    }

    /// `[d/dx, d/dy]`.
    #[wasm_bindgen(js_name = noiseGradient)]
    pub fn noise_gradient(&self, x: f64, y: f64) -> Vec<f64> {
        let (dx, dy) = self.terrain.noise().noise_gradient(x, y);
        vec![dx, dy]
    }

    /// Contour between two points with default tuning, as `[x0, y0, x1, y1, ...]`.
    #[wasm_bindgen(js_name = traceContour)]
    pub fn trace_contour(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<f64> {
        let line = trace_contour(
            self.terrain.noise(),
            glam::DVec2::new(x0, y0),
            glam::DVec2::new(x1, y1),
            &ContourParams::default(),
        );
        line.iter().flat_map(|p| [p.x, p.y]).collect()
    }
}
