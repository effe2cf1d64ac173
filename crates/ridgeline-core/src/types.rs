use glam::Vec3;

use crate::constants::MAX_INDEXED_VERTICES;
use crate::error::RidgelineError;

/// Regular grid descriptor shared by every mesh variant.
///
/// `origin` is `(x, y)` for flat 2D meshes (z ignored) and `(x, y, z)` for
/// planes, where `y` is the height axis. `extent` is the size along the
/// second grid axis: screen height for 2D, world depth for 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshConfig {
    rows: u32,
    cols: u32,
    origin: Vec3,
    width: f32,
    extent: f32,
}

/// Which vertex layout to emit for a [`MeshConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshVariant {
    /// Two components per vertex, `(x, y)`.
    Flat2D,
    /// Three components per vertex, `(x, height, z)`, height from noise.
    DisplacedPlane3D,
}

impl MeshVariant {
    /// Floats emitted per vertex.
    pub fn components(self) -> u32 {
        match self {
            MeshVariant::Flat2D => 2,
            MeshVariant::DisplacedPlane3D => 3,
        }
    }
}

impl MeshConfig {
    /// Validate grid dimensions. Origin defaults to zero and size to 1x1.
    pub fn new(rows: u32, cols: u32) -> Result<Self, RidgelineError> {
        if rows == 0 || cols == 0 {
            return Err(RidgelineError::InvalidMeshDimensions { rows, cols });
        }
        let vertices = (u64::from(rows) + 1).checked_mul(u64::from(cols) + 1);
        if vertices.map_or(true, |v| v > u64::from(MAX_INDEXED_VERTICES)) {
            return Err(RidgelineError::TooManyVertices { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            origin: Vec3::ZERO,
            width: 1.0,
            extent: 1.0,
        })
    }

    /// Set the grid origin. Non-finite components are rejected.
    pub fn with_origin(mut self, origin: [f32; 3]) -> Result<Self, RidgelineError> {
        if origin.iter().any(|c| !c.is_finite()) {
            return Err(RidgelineError::InvalidMeshExtent(format!(
                "origin {origin:?} is not finite"
            )));
        }
        self.origin = Vec3::from_array(origin);
        Ok(self)
    }

    /// Set the grid size: `width` along columns, `extent` along rows.
    pub fn with_size(mut self, width: f32, extent: f32) -> Result<Self, RidgelineError> {
        if !width.is_finite() || !extent.is_finite() {
            return Err(RidgelineError::InvalidMeshExtent(format!(
                "size {width}x{extent} is not finite"
            )));
        }
        self.width = width;
        self.extent = extent;
        Ok(self)
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height (2D) or depth (3D) of the grid.
    pub fn extent(&self) -> f32 {
        self.extent
    }

    pub fn num_vertex_rows(&self) -> u32 {
        self.rows + 1
    }

    pub fn num_vertex_cols(&self) -> u32 {
        self.cols + 1
    }

    pub fn num_vertices(&self) -> u32 {
        self.num_vertex_rows() * self.num_vertex_cols()
    }

    /// Length of the triangle-list index buffer.
    pub fn triangle_num_indices(&self) -> u32 {
        self.rows * self.cols * 6
    }

    /// Length of the boustrophedon line-strip index buffer.
    pub fn line_strip_num_indices(&self) -> u32 {
        let (rows, cols) = (self.rows, self.cols);
        1 + rows * (cols + 1) + cols * (rows + 1) + rows * cols
    }

    /// Flat index of vertex `(row, col)` in a row-major vertex buffer.
    pub fn vertex_index(&self, row: u32, col: u32) -> u32 {
        row * self.num_vertex_cols() + col
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            MeshConfig::new(0, 3),
            Err(RidgelineError::InvalidMeshDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            MeshConfig::new(2, 0),
            Err(RidgelineError::InvalidMeshDimensions { rows: 2, cols: 0 })
        );
    }

    #[test]
    fn test_vertex_limit() {
        // 255x255 cells -> 65536 vertices, the largest u16-addressable grid.
        assert!(MeshConfig::new(255, 255).is_ok());
        assert_eq!(
            MeshConfig::new(256, 255),
            Err(RidgelineError::TooManyVertices {
                rows: 256,
                cols: 255
            })
        );
        assert!(MeshConfig::new(u32::MAX, u32::MAX).is_err());
    }

    #[test]
    fn test_counts_for_2x3() {
        let config = MeshConfig::new(2, 3).unwrap();
        assert_eq!(config.num_vertex_rows(), 3);
        assert_eq!(config.num_vertex_cols(), 4);
        assert_eq!(config.num_vertices(), 12);
        assert_eq!(config.triangle_num_indices(), 36);
        assert_eq!(config.line_strip_num_indices(), 24);
        assert_eq!(config.vertex_index(2, 3), 11);
    }

    #[test]
    fn test_non_finite_extent_rejected() {
        let config = MeshConfig::new(1, 1).unwrap();
        assert!(config.with_origin([0.0, f32::NAN, 0.0]).is_err());
        assert!(config.with_size(f32::INFINITY, 1.0).is_err());

        let config = config
            .with_origin([-0.5, 0.0, -0.5])
            .and_then(|c| c.with_size(2.0, 3.0))
            .unwrap();
        assert_eq!(config.origin(), Vec3::new(-0.5, 0.0, -0.5));
        assert_eq!(config.width(), 2.0);
        assert_eq!(config.extent(), 3.0);
    }

    #[test]
    fn test_variant_components() {
        assert_eq!(MeshVariant::Flat2D.components(), 2);
        assert_eq!(MeshVariant::DisplacedPlane3D.components(), 3);
    }
}
