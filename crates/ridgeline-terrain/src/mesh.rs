//! Regular grid meshes: vertex walks and the two index orderings the
//! renderer draws them with.
//!
//! Vertices are row-major: vertex `(i, j)` for row `i` in `[0, rows]` and
//! column `j` in `[0, cols]` starts at float `components * (i * (cols + 1) + j)`.

use ridgeline_core::error::RidgelineError;
use ridgeline_core::types::{MeshConfig, MeshVariant};

use crate::noise::PerlinNoise2D;

/// `(x, y)` per vertex, spanning `width` x `extent` from the origin.
pub fn flat_2d_vertices(config: &MeshConfig) -> Vec<f32> {
    let origin = config.origin().as_dvec3();
    let (x_step, y_step) = steps(config);

    let mut vertices = Vec::with_capacity(config.num_vertices() as usize * 2);
    for i in 0..=config.rows() {
        for j in 0..=config.cols() {
            vertices.push((f64::from(j) * x_step + origin.x) as f32);
            vertices.push((f64::from(i) * y_step + origin.y) as f32);
        }
    }
    vertices
}

/// `(x, y, z)` per vertex on the horizontal plane `y = origin.y`.
pub fn flat_plane_vertices(config: &MeshConfig) -> Vec<f32> {
    plane_vertices(config, |_, _| 0.0)
}

/// Plane walk with the height axis displaced by `noise(j / zoom, i / zoom)`.
pub fn displaced_plane_vertices(
    config: &MeshConfig,
    noise: &PerlinNoise2D,
    zoom: f64,
) -> Result<Vec<f32>, RidgelineError> {
    if !zoom.is_finite() || zoom <= 0.0 {
        return Err(RidgelineError::InvalidZoom(zoom));
    }
    Ok(displaced_walk(config, noise, zoom))
}

/// Displaced plane walk with `zoom` already known to be positive.
pub(crate) fn displaced_walk(config: &MeshConfig, noise: &PerlinNoise2D, zoom: f64) -> Vec<f32> {
    plane_vertices(config, |i, j| {
        noise.noise(f64::from(j) / zoom, f64::from(i) / zoom)
    })
}

/// Vertex buffer for `variant`. `Flat2D` ignores `noise` and `zoom`.
pub fn vertices(
    config: &MeshConfig,
    variant: MeshVariant,
    noise: &PerlinNoise2D,
    zoom: f64,
) -> Result<Vec<f32>, RidgelineError> {
    match variant {
        MeshVariant::Flat2D => Ok(flat_2d_vertices(config)),
        MeshVariant::DisplacedPlane3D => displaced_plane_vertices(config, noise, zoom),
    }
}

/// Column and row spacing. Positions are accumulated in f64 and rounded to
/// f32 once per component.
fn steps(config: &MeshConfig) -> (f64, f64) {
    (
        f64::from(config.width()) / f64::from(config.cols()),
        f64::from(config.extent()) / f64::from(config.rows()),
    )
}

fn plane_vertices(config: &MeshConfig, height: impl Fn(u32, u32) -> f64) -> Vec<f32> {
    let origin = config.origin().as_dvec3();
    let (x_step, z_step) = steps(config);

    let mut vertices = Vec::with_capacity(config.num_vertices() as usize * 3);
    for i in 0..=config.rows() {
        for j in 0..=config.cols() {
            vertices.push((f64::from(j) * x_step + origin.x) as f32);
            vertices.push((origin.y + height(i, j)) as f32);
            vertices.push((f64::from(i) * z_step + origin.z) as f32);
        }
    }
    vertices
}

/// Two triangles per cell, wound so they face +y.
pub fn triangle_indices(config: &MeshConfig) -> Vec<u16> {
    let vertex_cols = config.num_vertex_cols();
    let mut indices = Vec::with_capacity(config.triangle_num_indices() as usize);

    for i in 0..config.rows() {
        for j in 0..config.cols() {
            let top_left = i * vertex_cols + j;

            indices.push(top_left as u16);
            indices.push((top_left + vertex_cols + 1) as u16);
            indices.push((top_left + 1) as u16);

            indices.push(top_left as u16);
            indices.push((top_left + vertex_cols) as u16);
            indices.push((top_left + vertex_cols + 1) as u16);
        }
    }

    indices
}

/// One connected line strip covering every grid edge plus one diagonal per cell.
///
/// Each row runs left to right along its top edge, then zig-zags back right
/// to left between the row below and the row above, and finally drops down
/// the left edge. The bottom edge is appended last.
pub fn line_strip_indices(config: &MeshConfig) -> Vec<u16> {
    let rows = config.rows();
    let cols = config.cols();
    let vertex_cols = config.num_vertex_cols();
    let mut indices = Vec::with_capacity(config.line_strip_num_indices() as usize);

    indices.push(0);

    for i in 0..rows {
        let row_start = i * vertex_cols;

        for j in 1..vertex_cols {
            indices.push((row_start + j) as u16);
        }

        for j in (0..cols).rev() {
            indices.push((row_start + j + 1 + vertex_cols) as u16); // down
            indices.push((row_start + j) as u16); // up, left
        }

        indices.push((row_start + vertex_cols) as u16);
    }

    for j in 1..vertex_cols {
        indices.push((rows * vertex_cols + j) as u16);
    }

    indices
}
