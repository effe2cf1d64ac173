//! Polyline relaxation onto the mid-level iso-line of the noise field.
//!
//! A straight segment is repeatedly subdivided and relaxed: interior points
//! slide along the noise gradient toward `noise01 == 0.5`, repel neighbours
//! that crowd them, and are pulled toward the midpoint of their neighbours.

use glam::DVec2;
use ridgeline_core::constants::CONTOUR_LEVEL;

use crate::noise::PerlinNoise2D;

/// Tuning for [`trace_contour`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContourParams {
    /// Midpoint insertion rounds. Output has `2^subdivisions + 1` points.
    pub subdivisions: u32,
    /// Relaxation passes after each subdivision.
    pub relax_iterations: u32,
    /// Scale of the pull along the noise gradient.
    pub flat_weight: f64,
    /// Scale of the push away from points closer than the nearness radius.
    pub repel: f64,
    /// Scale of the pull toward the neighbours' midpoint.
    pub smoothing: f64,
}

impl Default for ContourParams {
    fn default() -> Self {
        Self {
            subdivisions: 8,
            relax_iterations: 20,
            flat_weight: 2.0,
            repel: 2.0,
            smoothing: 0.5,
        }
    }
}

/// Trace a contour from `start` to `end`. Endpoints are kept fixed.
pub fn trace_contour(
    noise: &PerlinNoise2D,
    start: DVec2,
    end: DVec2,
    params: &ContourParams,
) -> Vec<DVec2> {
    let mut line = vec![start, end];
    for _ in 0..params.subdivisions {
        line = subdivide(&line);
        for _ in 0..params.relax_iterations {
            line = relax(noise, &line, params);
        }
    }
    log::debug!(
        "Traced contour {start} -> {end}: {} points",
        line.len()
    );
    line
}

/// Insert the midpoint between every pair of consecutive points.
pub fn subdivide(line: &[DVec2]) -> Vec<DVec2> {
    let Some(&first) = line.first() else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(line.len() * 2 - 1);
    out.push(first);
    for pair in line.windows(2) {
        out.push((pair[0] + pair[1]) / 2.0);
        out.push(pair[1]);
    }
    out
}

/// One relaxation pass. Reads only `line`, so point order does not bias the result.
pub fn relax(noise: &PerlinNoise2D, line: &[DVec2], params: &ContourParams) -> Vec<DVec2> {
    let len = line.len();
    let mut out = line.to_vec();
    if len < 3 {
        return out;
    }

    let nearness = (line[0] - line[len - 1]).length() / len as f64 / 2.0;
    let step = 1.0 / len as f64;

    for i in 1..len - 1 {
        let current = line[i];
        let level = noise.noise01(current.x, current.y);
        let (gx, gy) = noise.noise_gradient(current.x, current.y);
        let grad = DVec2::new(gx, gy);

        let mut down = if level > CONTOUR_LEVEL {
            -grad * params.flat_weight
        } else if level < CONTOUR_LEVEL {
            grad * params.flat_weight
        } else {
            DVec2::ZERO
        };

        for (j, &other) in line.iter().enumerate() {
            if i == j {
                continue;
            }
            let delta = current - other;
            if delta.length() < nearness {
                down += delta * params.repel;
            }
        }

        let midpoint = (line[i - 1] + line[i + 1]) / 2.0;
        down += (midpoint - current) * params.smoothing;

        out[i] = current + down * step;
    }

    out
}
