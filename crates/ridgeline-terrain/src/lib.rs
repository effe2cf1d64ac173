pub mod buffers;
pub mod contour;
pub mod mesh;
pub mod noise;

use ridgeline_core::config::TerrainConfig;
use ridgeline_core::error::RidgelineError;
use ridgeline_core::rng::XorShiftRng;
use ridgeline_core::types::{MeshConfig, MeshVariant};

use buffers::TerrainBuffers;
use noise::PerlinNoise2D;

/// Primary public struct for the ridgeline-terrain crate.
/// Owns one noise field and the grid it displaces.
pub struct Terrain {
    noise: PerlinNoise2D,
    mesh: MeshConfig,
    height_zoom: f64,
    seed: i32,
}

impl Terrain {
    /// Build a terrain from an already validated mesh and a generator.
    pub fn new(mesh: MeshConfig, rng: XorShiftRng, height_zoom: f64) -> Result<Self, RidgelineError> {
        if !height_zoom.is_finite() || height_zoom <= 0.0 {
            return Err(RidgelineError::InvalidZoom(height_zoom));
        }
        let seed = rng.state();
        log::debug!(
            "Terrain: seed {seed}, {}x{} grid, zoom {height_zoom}",
            mesh.rows(),
            mesh.cols()
        );
        Ok(Self {
            noise: PerlinNoise2D::new(rng),
            mesh,
            height_zoom,
            seed,
        })
    }

    pub fn from_config(config: &TerrainConfig) -> Result<Self, RidgelineError> {
        config.validate()?;
        Self::new(config.mesh()?, config.rng()?, config.height_zoom)
    }

    pub fn noise(&self) -> &PerlinNoise2D {
        &self.noise
    }

    pub fn mesh(&self) -> &MeshConfig {
        &self.mesh
    }

    pub fn height_zoom(&self) -> f64 {
        self.height_zoom
    }

    /// Seed the noise field was shuffled with.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    pub fn vertices(&self, variant: MeshVariant) -> Vec<f32> {
        match variant {
            MeshVariant::Flat2D => mesh::flat_2d_vertices(&self.mesh),
            MeshVariant::DisplacedPlane3D => {
                mesh::displaced_walk(&self.mesh, &self.noise, self.height_zoom)
            }
        }
    }

    /// Generate every buffer the renderer needs for `variant`.
    pub fn build_buffers(&self, variant: MeshVariant) -> TerrainBuffers {
        let buffers = TerrainBuffers {
            positions: self.vertices(variant),
            components: variant.components(),
            triangles: mesh::triangle_indices(&self.mesh),
            line_strip: mesh::line_strip_indices(&self.mesh),
        };
        log::debug!(
            "Built {:?} buffers: {} vertices, {} triangle indices, {} line-strip indices",
            variant,
            buffers.num_vertices(),
            buffers.triangles.len(),
            buffers.line_strip.len()
        );
        buffers
    }
}
