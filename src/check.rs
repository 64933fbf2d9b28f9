//! Post-hoc correctness checking
//!
//! Compares a result array against a closed-form expected value and
//! reports mismatches to stderr. Purely observational: the checkers
//! never abort the run, they only count and describe deviations so a
//! miscompiled or misrestructured kernel shows up immediately.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Mismatch reports printed before the checker goes quiet
const MAX_REPORTED: usize = 5;

/// Check scalar results against a closed-form expectation
///
/// A tolerance of `0.0` demands exact equality (appropriate when the
/// expected values are integral floats); the flat benchmarks use `1e-6`
/// for their continuous outputs. Up to the first five mismatches are
/// printed to stderr with index, actual, and expected value, followed by
/// the total count.
///
/// # Returns
/// Total number of mismatching positions.
pub fn check_scalars(
    results: &[f32],
    expected: impl Fn(usize) -> f32,
    tolerance: f32,
) -> usize {
    let mut num_errors = 0;
    for (index, &actual) in results.iter().enumerate() {
        let want = expected(index);
        if (actual - want).abs() > tolerance {
            num_errors += 1;
            if num_errors <= MAX_REPORTED {
                eprintln!(
                    "ERROR: results[{}] = {}, but should be {}",
                    index, actual, want
                );
            }
        }
    }
    if num_errors > 0 {
        eprintln!("Total errors: {}", num_errors);
    }
    num_errors
}

/// Check vector results against a closed-form expectation
///
/// Same contract as [`check_scalars`]; a position mismatches when any
/// component deviates beyond the tolerance.
pub fn check_vectors(
    results: &[Vec3],
    expected: impl Fn(usize) -> Vec3,
    tolerance: f32,
) -> usize {
    let mut num_errors = 0;
    for (index, &actual) in results.iter().enumerate() {
        let want = expected(index);
        let delta = actual - want;
        if delta.x.abs() > tolerance || delta.y.abs() > tolerance || delta.z.abs() > tolerance {
            num_errors += 1;
            if num_errors <= MAX_REPORTED {
                eprintln!(
                    "ERROR: results[{}] = <{}, {}, {}>, but should be <{}, {}, {}>",
                    index, actual.x, actual.y, actual.z, want.x, want.y, want.z
                );
            }
        }
    }
    if num_errors > 0 {
        eprintln!("Total errors: {}", num_errors);
    }
    num_errors
}
