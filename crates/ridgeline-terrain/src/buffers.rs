use ridgeline_core::types::{MeshConfig, MeshVariant};

/// CPU-side mesh data ready for upload. Positions are tightly packed,
/// `components` floats per vertex, no padding.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainBuffers {
    pub positions: Vec<f32>,
    pub components: u32,
    pub triangles: Vec<u16>,
    pub line_strip: Vec<u16>,
}

impl TerrainBuffers {
    /// Zero when `components` is zero.
    pub fn num_vertices(&self) -> u32 {
        (self.positions.len() as u32)
            .checked_div(self.components)
            .unwrap_or(0)
    }

    /// Vertex stride in bytes.
    pub fn stride(&self) -> u32 {
        self.components * std::mem::size_of::<f32>() as u32
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    pub fn line_strip_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.line_strip)
    }

    /// Check buffer lengths against what `config` says they should be.
    pub fn matches(&self, config: &MeshConfig, variant: MeshVariant) -> bool {
        self.components == variant.components()
            && self.positions.len() as u32 == config.num_vertices() * variant.components()
            && self.triangles.len() as u32 == config.triangle_num_indices()
            && self.line_strip.len() as u32 == config.line_strip_num_indices()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TerrainBuffers {
        TerrainBuffers {
            positions: vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0],
            components: 2,
            triangles: vec![0, 3, 1, 0, 2, 3],
            line_strip: vec![0, 1, 3, 0, 2, 3],
        }
    }

    #[test]
    fn test_byte_views_sizes() {
        let buffers = sample();
        assert_eq!(buffers.num_vertices(), 4);
        assert_eq!(buffers.stride(), 8);
        assert_eq!(buffers.position_bytes().len(), 32);
        assert_eq!(buffers.triangle_bytes().len(), 12);
        assert_eq!(buffers.line_strip_bytes().len(), 12);
    }

    #[test]
    fn test_byte_views_native_endian() {
        let buffers = sample();
        let third = &buffers.position_bytes()[8..12];
        assert_eq!(third, 1.0f32.to_ne_bytes());
        let second_index = &buffers.triangle_bytes()[2..4];
        assert_eq!(second_index, 3u16.to_ne_bytes());
    }

    #[test]
    fn test_zero_components_has_no_vertices() {
        let buffers = TerrainBuffers {
            components: 0,
            ..sample()
        };
        assert_eq!(buffers.num_vertices(), 0);
        assert!(!buffers.matches(&MeshConfig::new(1, 1).unwrap(), MeshVariant::Flat2D));
    }

    #[test]
    fn test_matches_config() {
        let config = MeshConfig::new(1, 1).unwrap();
        let buffers = sample();
        assert!(buffers.matches(&config, MeshVariant::Flat2D));
        assert!(!buffers.matches(&config, MeshVariant::DisplacedPlane3D));
        assert!(!buffers.matches(&MeshConfig::new(2, 1).unwrap(), MeshVariant::Flat2D));
    }
}
