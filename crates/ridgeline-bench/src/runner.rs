use std::time::Instant;

use ridgeline_core::error::RidgelineError;
use ridgeline_core::types::MeshVariant;
use ridgeline_terrain::mesh;
use ridgeline_terrain::Terrain;

use crate::scenes::SceneConfig;

/// Timing data for one generation stage.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TimingSeries {
    pub mean_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Result of a single scene benchmark.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    pub scene_name: String,
    pub vertices: u32,
    pub iterations: u32,
    /// Full displaced-plane build: vertices plus both index buffers.
    pub timings: TimingSeries,
    pub vertex_timings: TimingSeries,
    pub index_timings: TimingSeries,
}

/// Times terrain buffer generation on the CPU.
pub struct BenchmarkRunner {
    iterations: u32,
}

impl BenchmarkRunner {
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations: iterations.max(1),
        }
    }

    /// Run a single benchmark scene and return timing results.
    pub fn run_scene(&self, config: &SceneConfig) -> Result<BenchmarkResult, RidgelineError> {
        let terrain = Terrain::from_config(&config.terrain)?;
        let grid = *terrain.mesh();
        log::info!(
            "Running scene '{}' ({} vertices, seed {})...",
            config.name,
            grid.num_vertices(),
            terrain.seed()
        );

        let n = self.iterations as usize;
        let mut totals = Vec::with_capacity(n);
        let mut vertex_times = Vec::with_capacity(n);
        let mut index_times = Vec::with_capacity(n);

        for _ in 0..self.iterations {
            let start = Instant::now();
            let positions = terrain.vertices(MeshVariant::DisplacedPlane3D);
            let vertex_elapsed = elapsed_ms(start);

            let index_start = Instant::now();
            let triangles = mesh::triangle_indices(&grid);
            let line_strip = mesh::line_strip_indices(&grid);
            let index_elapsed = elapsed_ms(index_start);

            totals.push(elapsed_ms(start));
            vertex_times.push(vertex_elapsed);
            index_times.push(index_elapsed);

            // Keep the buffers observable so the work is not optimized away.
            std::hint::black_box((positions, triangles, line_strip));
        }

        let timings = compute_timings(&totals);
        log::info!(
            "  Done: mean={:.3}ms, p95={:.3}ms, p99={:.3}ms",
            timings.mean_ms,
            timings.p95_ms,
            timings.p99_ms
        );

        Ok(BenchmarkResult {
            scene_name: config.name.clone(),
            vertices: grid.num_vertices(),
            iterations: self.iterations,
            timings,
            vertex_timings: compute_timings(&vertex_times),
            index_timings: compute_timings(&index_times),
        })
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Compute timing statistics from a list of run times in milliseconds.
pub fn compute_timings(times: &[f64]) -> TimingSeries {
    if times.is_empty() {
        return TimingSeries {
            mean_ms: 0.0,
            median_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
        };
    }

    let mut sorted = times.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let median = if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    };
    let p95_idx = ((n as f64) * 0.95).ceil() as usize;
    let p99_idx = ((n as f64) * 0.99).ceil() as usize;

    TimingSeries {
        mean_ms: mean,
        median_ms: median,
        p95_ms: sorted[p95_idx.min(n - 1)],
        p99_ms: sorted[p99_idx.min(n - 1)],
        min_ms: sorted[0],
        max_ms: sorted[n - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::{standard_scenes, BENCH_SEED};

    #[test]
    fn test_compute_timings_empty() {
        let t = compute_timings(&[]);
        assert_eq!(t.mean_ms, 0.0);
        assert_eq!(t.max_ms, 0.0);
    }

    #[test]
    fn test_compute_timings_stats() {
        let t = compute_timings(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!(t.mean_ms, 2.5);
        assert_eq!(t.median_ms, 2.5);
        assert_eq!(t.min_ms, 1.0);
        assert_eq!(t.max_ms, 4.0);
        assert_eq!(t.p95_ms, 4.0);

        let t = compute_timings(&[5.0, 1.0, 3.0]);
        assert_eq!(t.median_ms, 3.0);
    }

    #[test]
    fn test_run_smallest_scene() {
        let scenes = standard_scenes(BENCH_SEED);
        let runner = BenchmarkRunner::new(2);
        let result = runner.run_scene(&scenes[0]).unwrap();
        assert_eq!(result.scene_name, "32x32");
        assert_eq!(result.vertices, 33 * 33);
        assert_eq!(result.iterations, 2);
        assert!(result.timings.min_ms >= 0.0);
        assert!(result.timings.max_ms >= result.vertex_timings.min_ms);
    }

    #[test]
    fn test_zero_iterations_clamped() {
        let runner = BenchmarkRunner::new(0);
        let result = runner.run_scene(&standard_scenes(1)[0]).unwrap();
        assert_eq!(result.iterations, 1);
    }
}
