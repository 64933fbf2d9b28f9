//! Elementwise vector transforms
//!
//! Pure per-element functions over 3-component vectors. Each transform is
//! position-independent and order-independent, which is what lets the tile
//! engine stage elements freely and what the auto-vectorizer exploits.
//!
//! The kernels are written out componentwise rather than delegating to
//! glam's `dot`/`cross`, so the scalar instruction stream the compiler
//! sees is exactly the form the benchmarks measure.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// A pure transform from one vector to one scalar
///
/// Implementors must be free of side effects and must not depend on
/// element position or prior calls. The tile engine is generic over this
/// capability and calls it exactly once per element.
pub trait ElementwiseTransform {
    /// Apply the transform to a single vector
    fn apply(&self, v: Vec3) -> f32;
}

/// A pure transform from two vectors to one output
///
/// Used by the flat (untiled) benchmark kernels, which walk two input
/// arrays in lockstep.
pub trait PairwiseTransform {
    /// Per-element output type (scalar for dot, vector for cross)
    type Output: Copy + Default + PartialEq + std::fmt::Debug;

    /// Apply the transform to one pair of vectors
    fn apply(&self, a: Vec3, b: Vec3) -> Self::Output;
}

/// Component sum: `v.x + v.y + v.z`
///
/// Reference transform for the tile engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentSum;

impl ElementwiseTransform for ComponentSum {
    #[inline]
    fn apply(&self, v: Vec3) -> f32 {
        v.x + v.y + v.z
    }
}

/// Dot product of two vectors
#[derive(Debug, Clone, Copy, Default)]
pub struct DotProduct;

impl PairwiseTransform for DotProduct {
    type Output = f32;

    #[inline]
    fn apply(&self, a: Vec3, b: Vec3) -> f32 {
        a.x * b.x + a.y * b.y + a.z * b.z
    }
}

/// Cross product of two vectors
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossProduct;

impl PairwiseTransform for CrossProduct {
    type Output = Vec3;

    #[inline]
    fn apply(&self, a: Vec3, b: Vec3) -> Vec3 {
        Vec3::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }
}

/// Apply a pairwise transform across two arrays (flat, untiled)
///
/// This is the hot loop of the flat benchmarks: one transform call per
/// element, no staging. Also serves as the reference the tiled path is
/// tested against.
///
/// # Panics
/// Panics if the three slices differ in length.
#[inline]
pub fn apply_flat<P: PairwiseTransform>(
    transform: &P,
    a: &[Vec3],
    b: &[Vec3],
    out: &mut [P::Output],
) {
    assert_eq!(a.len(), b.len());
    assert_eq!(a.len(), out.len());

    for i in 0..a.len() {
        out[i] = transform.apply(a[i], b[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_sum() {
        let t = ComponentSum;
        assert_eq!(t.apply(Vec3::new(1.0, 2.0, 3.0)), 6.0);
        assert_eq!(t.apply(Vec3::ZERO), 0.0);
    }

    #[test]
    fn test_dot_matches_glam() {
        let a = Vec3::new(1.5, -2.0, 4.0);
        let b = Vec3::new(0.5, 3.0, -1.0);
        assert_eq!(DotProduct.apply(a, b), a.dot(b));
    }

    #[test]
    fn test_cross_matches_glam() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 5.0, 6.0);
        assert_eq!(CrossProduct.apply(a, b), a.cross(b));
    }

    #[test]
    fn test_cross_of_parallel_is_zero() {
        let v = Vec3::splat(0.25);
        assert_eq!(CrossProduct.apply(v, v), Vec3::ZERO);
    }

    #[test]
    fn test_apply_flat_dot() {
        let a: Vec<Vec3> = (0..4).map(|i| Vec3::splat(i as f32)).collect();
        let b = a.clone();
        let mut out = vec![0.0f32; 4];

        apply_flat(&DotProduct, &a, &b, &mut out);

        // dot(splat(i), splat(i)) = 3 * i^2
        for (i, &v) in out.iter().enumerate() {
            assert_eq!(v, 3.0 * (i * i) as f32);
        }
    }
}
