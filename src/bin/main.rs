//! vectile CLI
//!
//! One binary, three benchmark drivers: the flat dot and cross kernels
//! with the shared timing harness, and the tiled component-sum engine
//! with its correctness check.
//!
//! Author: Moroya Sakamoto

use clap::{Args, Parser, Subcommand};
use glam::Vec3;
use vectile::check::{check_scalars, check_vectors};
use vectile::harness::{
    generate_gradient_vectors, generate_index_vectors, run_timed, BenchConfig,
};
use vectile::tile::TileEngine;
use vectile::transform::{apply_flat, ComponentSum, CrossProduct, DotProduct};

/// Tile-driver input length; index-valued f32 components stay exact
/// below 2^24, so this must not exceed 2^23 - 1 by much
const TILE_DRIVER_LENGTH: usize = 10_000_000;
const TILE_DRIVER_TILE_SIZE: usize = 1024;

/// Epsilon for the flat benchmarks' continuous outputs
const FLOAT_ERROR: f32 = 1e-6;

#[derive(Parser)]
#[command(name = "vectile")]
#[command(author = "Moroya Sakamoto")]
#[command(version = vectile::VERSION)]
#[command(about = "Tiled AoS->SoA elementwise vector benchmarks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Shared flags of the flat benchmarks
#[derive(Args)]
struct FlatArgs {
    /// Number of timed iterations
    #[arg(short = 'n', default_value = "1")]
    iterations: usize,

    /// Cube-root side length (vector count is side^3)
    #[arg(short = 'l', default_value = "256")]
    side_length: usize,

    /// Save per-iteration timings to times_<side>_<name>.csv
    #[arg(short = 's', value_name = "name")]
    save: Option<String>,
}

impl FlatArgs {
    fn into_config(self) -> BenchConfig {
        BenchConfig {
            iterations: self.iterations,
            side_length: self.side_length,
            save_suffix: self.save,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Time the flat dot-product kernel
    Dot(FlatArgs),

    /// Time the flat cross-product kernel
    Cross(FlatArgs),

    /// Run the tiled component-sum engine and check its output
    Tile,
}

fn main() {
    // Malformed arguments (e.g. a flag with its value missing) must
    // exit 1, not clap's usage-error code.
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        use clap::error::ErrorKind;
        if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            let _ = e.print();
            std::process::exit(0);
        }
        eprintln!("{}", e);
        std::process::exit(1);
    });

    match cli.command {
        Commands::Dot(args) => cmd_dot(args.into_config()),
        Commands::Cross(args) => cmd_cross(args.into_config()),
        Commands::Tile => cmd_tile(),
    }
}

fn cmd_dot(config: BenchConfig) {
    let num_vectors = config.num_vectors();
    let vectors1 = generate_gradient_vectors(num_vectors);
    let vectors2 = generate_gradient_vectors(num_vectors);
    let mut results = vec![0.0f32; num_vectors];

    let timings = run_timed(&config, || {
        apply_flat(&DotProduct, &vectors1, &vectors2, &mut results);
    });
    save_timings(&config, &timings);

    // Both inputs are splat(i/n), so each dot product is 3*(i/n)^2
    let n = num_vectors as f32;
    check_scalars(
        &results,
        |index| 3.0 * (index as f32 / n) * (index as f32 / n),
        FLOAT_ERROR,
    );
}

fn cmd_cross(config: BenchConfig) {
    let num_vectors = config.num_vectors();
    let vectors1 = generate_gradient_vectors(num_vectors);
    let vectors2 = generate_gradient_vectors(num_vectors);
    let mut results = vec![Vec3::ZERO; num_vectors];

    let timings = run_timed(&config, || {
        apply_flat(&CrossProduct, &vectors1, &vectors2, &mut results);
    });
    save_timings(&config, &timings);

    // Identical inputs, so every cross product is the zero vector
    check_vectors(&results, |_| Vec3::ZERO, FLOAT_ERROR);
}

fn cmd_tile() {
    let input = generate_index_vectors(TILE_DRIVER_LENGTH);

    let mut engine = TileEngine::new(TILE_DRIVER_TILE_SIZE).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    let results = engine.run(&input, &ComponentSum);

    // Each input is splat(i); the component sum is exactly 3*i
    check_scalars(&results, |index| 3.0 * index as f32, 0.0);
}

fn save_timings(config: &BenchConfig, timings: &vectile::harness::Timings) {
    if let Some(suffix) = &config.save_suffix {
        if let Err(e) = timings.save_csv(config.side_length, suffix) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
