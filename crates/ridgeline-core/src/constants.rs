//! Single source of truth for shared constants.
//! The web crate and the bench runner read grid limits from here so the
//! browser renderer and native timings agree on buffer shapes.

/// Number of gradient vectors held by a noise engine.
pub const GRADIENT_COUNT: usize = 256;

/// Mask applied to lattice coordinates before permutation lookup.
pub const LATTICE_MASK: i32 = 0xFF;

/// Classic Perlin permutation table. Fixed for the lifetime of the process;
/// gradient shuffling is the only seeded part of the noise.
pub const PERMUTATION_TABLE: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// Largest vertex count addressable by a u16 index buffer.
pub const MAX_INDEXED_VERTICES: u32 = 65536;

/// Grid cells sampled per unit of noise space when displacing terrain.
/// Larger values stretch features over more vertices.
pub const DEFAULT_HEIGHT_ZOOM: f64 = 20.0;

/// Mountains demo grid: 200x200 cells over a unit square centred on the origin.
pub const DEFAULT_GRID_ROWS: u32 = 200;
pub const DEFAULT_GRID_COLS: u32 = 200;
pub const DEFAULT_ORIGIN: [f32; 3] = [-0.5, 0.0, -0.5];
pub const DEFAULT_WIDTH: f32 = 1.0;
pub const DEFAULT_DEPTH: f32 = 1.0;

/// Iso-level traced by the contour relaxer, in `noise01` units.
pub const CONTOUR_LEVEL: f64 = 0.5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permutation_table_is_permutation() {
        let mut seen = [false; 256];
        for &v in PERMUTATION_TABLE.iter() {
            assert!(!seen[v as usize], "duplicate entry {v}");
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_default_grid_fits_u16_indices() {
        let vertices = (DEFAULT_GRID_ROWS + 1) * (DEFAULT_GRID_COLS + 1);
        assert!(vertices <= MAX_INDEXED_VERTICES);
    }
}
