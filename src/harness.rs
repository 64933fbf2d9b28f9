//! Timing harness and benchmark configuration
//!
//! Wall-clock measurement loop shared by the flat benchmarks: runs a
//! kernel a configured number of times, prints a live running-average
//! table, and optionally persists the raw per-run microsecond counts to
//! a CSV file. Configuration is an explicit struct passed by reference,
//! not ambient process state.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

/// Timing persistence errors
#[derive(Error, Debug)]
pub enum HarnessError {
    /// I/O error while writing the timings CSV
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Flat-benchmark configuration
///
/// Built once from parsed CLI arguments and passed into the harness.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Number of timed iterations
    pub iterations: usize,
    /// Cube-root of the vector count (`L = side_length^3`)
    pub side_length: usize,
    /// When set, per-iteration timings are written to
    /// `times_<side>_<suffix>.csv`
    pub save_suffix: Option<String>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: 1,
            side_length: 256,
            save_suffix: None,
        }
    }
}

impl BenchConfig {
    /// Total vector count `side_length^3`
    #[inline]
    pub fn num_vectors(&self) -> usize {
        self.side_length * self.side_length * self.side_length
    }
}

/// Raw per-iteration wall-clock timings
#[derive(Debug, Clone)]
pub struct Timings {
    times_us: Vec<u64>,
}

impl Timings {
    /// Per-iteration durations in microseconds, in run order
    pub fn as_micros(&self) -> &[u64] {
        &self.times_us
    }

    /// Mean duration in microseconds (0 for an empty run)
    pub fn average_micros(&self) -> u64 {
        if self.times_us.is_empty() {
            return 0;
        }
        self.times_us.iter().sum::<u64>() / self.times_us.len() as u64
    }

    /// Persist timings as `times_<side>_<suffix>.csv`
    ///
    /// One microsecond integer per line, no header, no trailing
    /// metadata.
    ///
    /// # Returns
    /// The path written.
    pub fn save_csv(&self, side_length: usize, suffix: &str) -> Result<PathBuf, HarnessError> {
        let path = PathBuf::from(format!("times_{}_{}.csv", side_length, suffix));
        let mut file = BufWriter::new(File::create(&path)?);
        for run in &self.times_us {
            writeln!(file, "{}", run)?;
        }
        file.flush()?;
        Ok(path)
    }
}

/// Run a kernel `config.iterations` times under the wall clock
///
/// Prints a `Runs Single Average` header and then one `\r`-overwritten
/// status line per iteration: run number, single-run milliseconds, and
/// the running average in milliseconds.
pub fn run_timed(config: &BenchConfig, mut kernel: impl FnMut()) -> Timings {
    let mut times_us = Vec::with_capacity(config.iterations);
    let mut total_us: u64 = 0;

    println!("Runs Single Average");
    for index in 0..config.iterations {
        if index > 0 {
            print!("\r");
        }
        let start = Instant::now();

        kernel();

        let run = start.elapsed().as_micros() as u64;
        total_us += run;
        times_us.push(run);

        print!(
            "{:4} {:6} {:7} ms   ",
            index + 1,
            run as f64 / 1000.0,
            total_us as f64 / (index + 1) as f64 / 1000.0
        );
        let _ = std::io::stdout().flush();
    }
    println!();

    Timings { times_us }
}

/// Flat-benchmark input: `Vec3::splat(i / n)` for each index
///
/// Every component carries the same gradient value in `[0, 1)`, which
/// gives the dot benchmark its `3 * (i/n)^2` closed form and makes every
/// cross product the zero vector.
pub fn generate_gradient_vectors(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|index| Vec3::splat(index as f32 / n as f32))
        .collect()
}

/// Tile-driver input: `Vec3::splat(i)` for each index
///
/// Index-valued components stay exact in f32 below 2^24, which bounds
/// the driver length.
pub fn generate_index_vectors(n: usize) -> Vec<Vec3> {
    (0..n).map(|index| Vec3::splat(index as f32)).collect()
}
