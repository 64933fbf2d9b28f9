//! Shared helpers for integration tests
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Vectors whose components differ per axis, so layout bugs that swap
/// or misalign axes cannot cancel out
pub fn skewed_vectors(n: usize) -> Vec<Vec3> {
    (0..n)
        .map(|i| {
            let f = i as f32;
            Vec3::new(f, f * 10.0 + 1.0, f * 100.0 + 2.0)
        })
        .collect()
}
