use std::path::PathBuf;
use std::process;
use std::str::FromStr;

use ridgeline_bench::report;
use ridgeline_bench::runner::BenchmarkRunner;
use ridgeline_bench::scenes::{self, BENCH_SEED};
use ridgeline_core::config::load_config_from_str;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    let mut config_path: Option<PathBuf> = None;
    let mut baseline_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut regression_threshold = 10.0f64;
    let mut iterations = 20u32;
    let mut seed = BENCH_SEED;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--config" => config_path = Some(PathBuf::from(value(&args, &mut i, flag))),
            "--baseline" => baseline_path = Some(PathBuf::from(value(&args, &mut i, flag))),
            "--output" => output_path = Some(PathBuf::from(value(&args, &mut i, flag))),
            "--regression-threshold" => regression_threshold = parse(&args, &mut i, flag),
            "--iterations" => iterations = parse(&args, &mut i, flag),
            "--seed" => seed = parse(&args, &mut i, flag),
            "--help" | "-h" => {
                eprintln!("Usage: bench-runner [OPTIONS]");
                eprintln!("  --config <path>                Benchmark a single RON terrain config");
                eprintln!("  --seed <n>                     Seed for the standard scenes (default: 42)");
                eprintln!("  --iterations <n>               Builds per scene (default: 20)");
                eprintln!("  --baseline <path>              Load baseline JSON for comparison");
                eprintln!("  --output <path>                Save current results as JSON baseline");
                eprintln!(
                    "  --regression-threshold <pct>   Regression threshold percentage (default: 10)"
                );
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                process::exit(1);
            }
        }
        i += 1;
    }

    let scene_configs = match &config_path {
        Some(path) => {
            let contents = std::fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Failed to read {}: {}", path.display(), e);
                process::exit(1);
            });
            let terrain = load_config_from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Invalid config {}: {}", path.display(), e);
                process::exit(1);
            });
            vec![scenes::custom_scene(terrain)]
        }
        None => scenes::standard_scenes(seed),
    };

    let runner = BenchmarkRunner::new(iterations);
    let mut results = Vec::new();

    for config in &scene_configs {
        match runner.run_scene(config) {
            Ok(result) => results.push(result),
            Err(e) => {
                eprintln!("Scene '{}' failed: {}", config.name, e);
                process::exit(1);
            }
        }
    }

    println!("\n## Benchmark Results\n");
    println!("{}", report::format_markdown(&results));

    if let Some(ref path) = output_path {
        let baseline = report::Baseline {
            label: format!("seed-{}-x{}", seed, iterations),
            results: results.clone(),
        };
        if let Err(e) = report::save_baseline(path, &baseline) {
            eprintln!("Failed to save baseline {}: {}", path.display(), e);
            process::exit(1);
        }
        log::info!("Saved baseline to {}", path.display());
    }

    if let Some(ref path) = baseline_path {
        if let Some(baseline) = report::load_baseline(path) {
            let regressions = report::compare(&results, &baseline, regression_threshold);
            println!(
                "{}",
                report::format_comparison(&regressions, regression_threshold)
            );
            if !regressions.is_empty() {
                eprintln!(
                    "ERROR: {} regressions detected, exiting with code 1",
                    regressions.len()
                );
                process::exit(1);
            }
        } else {
            log::warn!("Baseline file not found: {}", path.display());
        }
    }

    log::info!("Benchmark complete.");
}

/// Advance past `flag` and return its argument, exiting if it is missing.
fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> &'a str {
    *i += 1;
    match args.get(*i) {
        Some(v) => v,
        None => {
            eprintln!("Missing value for {}", flag);
            process::exit(1);
        }
    }
}

fn parse<T: FromStr>(args: &[String], i: &mut usize, flag: &str) -> T {
    let raw = value(args, i, flag);
    raw.parse().unwrap_or_else(|_| {
        eprintln!("invalid {} value: {}", flag, raw);
        process::exit(1);
    })
}
