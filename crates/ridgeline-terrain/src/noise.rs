use std::f64::consts::TAU;

use ridgeline_core::constants::{GRADIENT_COUNT, LATTICE_MASK, PERMUTATION_TABLE};
use ridgeline_core::math::{smootherstep, smootherstep_dw, to_int32};
use ridgeline_core::rng::XorShiftRng;

/// 2D gradient noise over angle-based unit gradients.
///
/// Gradients are stored as f32 pairs, the precision the demos upload them
/// at; every sample is evaluated in f64.
#[derive(Debug, Clone)]
pub struct PerlinNoise2D {
    grad_x: [f32; GRADIENT_COUNT],
    grad_y: [f32; GRADIENT_COUNT],
}

/// One lattice corner around a sample: offset from the corner and its gradient.
#[derive(Debug, Clone, Copy)]
struct Corner {
    offset_x: f64,
    offset_y: f64,
    grad_x: f64,
    grad_y: f64,
}

impl PerlinNoise2D {
    /// Build the gradient table and shuffle it with `rng`.
    ///
    /// Both component arrays are shuffled by generators in the same state, so
    /// `grad_x[i]` and `grad_y[i]` stay the cosine and sine of one angle.
    pub fn new(mut rng: XorShiftRng) -> Self {
        let mut grad_x = [0.0f32; GRADIENT_COUNT];
        let mut grad_y = [0.0f32; GRADIENT_COUNT];
        for i in 0..GRADIENT_COUNT {
            let angle = TAU * i as f64 / GRADIENT_COUNT as f64;
            grad_x[i] = angle.cos() as f32;
            grad_y[i] = angle.sin() as f32;
        }

        let mut rng_y = rng.clone();
        rng.shuffle_in_place(&mut grad_x);
        rng_y.shuffle_in_place(&mut grad_y);

        Self { grad_x, grad_y }
    }

    /// Gradient vector stored at table index `index`.
    pub fn gradient(&self, index: u8) -> (f32, f32) {
        (self.grad_x[index as usize], self.grad_y[index as usize])
    }

    /// Noise value at `(x, y)`, nominally in `[-1, 1]`.
    pub fn noise(&self, x: f64, y: f64) -> f64 {
        self.corners(x, y)
            .iter()
            .map(|c| gradient_dot_weighted(c))
            .sum()
    }

    /// Noise remapped to `[0, 1]`.
    pub fn noise01(&self, x: f64, y: f64) -> f64 {
        (1.0 + self.noise(x, y)) / 2.0
    }

    /// Analytic partial derivatives `(d/dx, d/dy)` of [`Self::noise`].
    pub fn noise_gradient(&self, x: f64, y: f64) -> (f64, f64) {
        self.corners(x, y).iter().fold((0.0, 0.0), |(dx, dy), c| {
            let swapped = Corner {
                offset_x: c.offset_y,
                offset_y: c.offset_x,
                grad_x: c.grad_y,
                grad_y: c.grad_x,
            };
            (dx + gradient_dot_weighted_dx(c), dy + gradient_dot_weighted_dx(&swapped))
        })
    }

    /// Corners in order top-left, top-right, bottom-left, bottom-right.
    fn corners(&self, x: f64, y: f64) -> [Corner; 4] {
        let left_x = x.floor();
        let right_x = left_x + 1.0;
        let top_y = y.floor();
        let bottom_y = top_y + 1.0;

        let corner = |corner_x: f64, corner_y: f64| {
            let index = gradient_index(corner_x, corner_y);
            Corner {
                offset_x: x - corner_x,
                offset_y: y - corner_y,
                grad_x: f64::from(self.grad_x[index]),
                grad_y: f64::from(self.grad_y[index]),
            }
        };

        [
            corner(left_x, top_y),
            corner(right_x, top_y),
            corner(left_x, bottom_y),
            corner(right_x, bottom_y),
        ]
    }
}

/// Two-stage permutation hash of an integer lattice point.
fn gradient_index(corner_x: f64, corner_y: f64) -> usize {
    // Lattice coordinates are already integral; non-finite input hashes as 0.
    let cx = to_int32(corner_x).unwrap_or(0);
    let cy = to_int32(corner_y).unwrap_or(0);
    let row = PERMUTATION_TABLE[(cy & LATTICE_MASK) as usize];
    PERMUTATION_TABLE[(i32::from(row).wrapping_add(cx) & LATTICE_MASK) as usize] as usize
}

fn gradient_dot_weighted(c: &Corner) -> f64 {
    smootherstep(1.0 - c.offset_x.abs())
        * smootherstep(1.0 - c.offset_y.abs())
        * (c.grad_x * c.offset_x + c.grad_y * c.offset_y)
}

/// x-derivative of one corner's contribution. The y-derivative is this with
/// the axes swapped.
fn gradient_dot_weighted_dx(c: &Corner) -> f64 {
    let smooth_y = smootherstep(1.0 - c.offset_y.abs());
    let (smooth_x, smooth_x_dx) = if c.offset_x >= 0.0 {
        (
            smootherstep(1.0 - c.offset_x),
            -smootherstep_dw(1.0 - c.offset_x),
        )
    } else {
        (
            smootherstep(1.0 + c.offset_x),
            smootherstep_dw(1.0 + c.offset_x),
        )
    };
    let u = smooth_y * smooth_x;
    let v = c.offset_x * c.grad_x + c.offset_y * c.grad_y;
    let u_dx = smooth_x_dx * smooth_y;
    let v_dx = c.grad_x;
    u * v_dx + v * u_dx
}
