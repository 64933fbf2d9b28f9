//! AoS -> SoA tile staging
//!
//! The staging plane turns a block of up to `tile_size` interleaved
//! vectors into three contiguous component runs:
//!
//! ```text
//! AoS input:  [x0,y0,z0, x1,y1,z1, x2,y2,z2, ...]
//! SoA plane:  [x0,x1,x2,...  y0,y1,y2,...  z0,z1,z2,...]
//!              |--- T ---|   |--- T ---|   |--- T ---|
//! ```
//!
//! Staging is a pure layout change: no arithmetic is applied, so a
//! restage followed by reconstruction reproduces the input bit-for-bit.
//! For the final (remainder) tile only the first `count` positions of
//! each run are written; the tail is stale and must not be read.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// SoA staging buffer for one tile of input vectors
///
/// Holds `3 * tile_size` scalars, one sub-range of `tile_size` per
/// component axis. Allocated once and reused across tiles; each
/// [`restage`](StagingPlane::restage) overwrites the previous tile's
/// staged prefix and no state is carried between tiles.
#[derive(Debug, Clone)]
pub struct StagingPlane {
    components: Vec<f32>,
    tile_size: usize,
    staged: usize,
}

impl StagingPlane {
    /// Create a staging plane for the given tile size
    pub fn new(tile_size: usize) -> Self {
        Self {
            components: vec![0.0; 3 * tile_size],
            tile_size,
            staged: 0,
        }
    }

    /// Tile capacity of this plane
    #[inline]
    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Number of elements staged by the most recent restage
    #[inline]
    pub fn staged(&self) -> usize {
        self.staged
    }

    /// Stage `count` vectors from `source[offset..]` into component runs
    ///
    /// Component `k` of element `i` lands at plane position
    /// `k * tile_size + i`. Positions `[count, tile_size)` of each run
    /// are left untouched.
    ///
    /// # Panics
    /// Panics if `count > tile_size` or the source range is out of
    /// bounds.
    #[inline]
    pub fn restage(&mut self, source: &[Vec3], offset: usize, count: usize) {
        assert!(count <= self.tile_size);
        let block = &source[offset..offset + count];

        let t = self.tile_size;
        for (i, v) in block.iter().enumerate() {
            self.components[i] = v.x;
            self.components[t + i] = v.y;
            self.components[2 * t + i] = v.z;
        }
        self.staged = count;
    }

    /// Rebuild the vector staged at position `i`
    ///
    /// Inverse of [`restage`](StagingPlane::restage) for a single
    /// element. Only positions below the staged count hold meaningful
    /// data.
    #[inline]
    pub fn reconstruct(&self, i: usize) -> Vec3 {
        debug_assert!(i < self.staged);
        let t = self.tile_size;
        Vec3::new(
            self.components[i],
            self.components[t + i],
            self.components[2 * t + i],
        )
    }

    /// The three component runs as slices (x, y, z)
    #[inline]
    pub fn as_axis_runs(&self) -> (&[f32], &[f32], &[f32]) {
        let t = self.tile_size;
        (
            &self.components[..t],
            &self.components[t..2 * t],
            &self.components[2 * t..],
        )
    }
}

/// Scalar output buffer for one tile
///
/// Written by the inner loop, flushed to the output array immediately
/// after. Same lifetime rule as [`StagingPlane`]: reused per tile, no
/// state across tiles.
#[derive(Debug, Clone)]
pub struct OutputPlane {
    values: Vec<f32>,
}

impl OutputPlane {
    /// Create an output plane for the given tile size
    pub fn new(tile_size: usize) -> Self {
        Self {
            values: vec![0.0; tile_size],
        }
    }

    /// Store a scalar result at position `i`
    #[inline]
    pub fn set(&mut self, i: usize, value: f32) {
        self.values[i] = value;
    }

    /// Copy the first `count` results into `destination[offset..]`
    ///
    /// # Panics
    /// Panics if `count` exceeds the plane size or the destination range
    /// is out of bounds.
    #[inline]
    pub fn writeback(&self, count: usize, destination: &mut [f32], offset: usize) {
        destination[offset..offset + count].copy_from_slice(&self.values[..count]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restage_layout() {
        let input = vec![
            Vec3::new(1.0, 10.0, 100.0),
            Vec3::new(2.0, 20.0, 200.0),
            Vec3::new(3.0, 30.0, 300.0),
        ];

        let mut plane = StagingPlane::new(4);
        plane.restage(&input, 0, 3);

        let (x, y, z) = plane.as_axis_runs();
        assert_eq!(&x[..3], &[1.0, 2.0, 3.0]);
        assert_eq!(&y[..3], &[10.0, 20.0, 30.0]);
        assert_eq!(&z[..3], &[100.0, 200.0, 300.0]);
        assert_eq!(plane.staged(), 3);
    }

    #[test]
    fn test_round_trip_identity() {
        // Exact reconstruction, including values with no short decimal form
        let input: Vec<Vec3> = (0..7)
            .map(|i| {
                let f = i as f32;
                Vec3::new(f / 3.0, -f * 0.1, f + 0.7)
            })
            .collect();

        let mut plane = StagingPlane::new(7);
        plane.restage(&input, 0, 7);

        for (i, &v) in input.iter().enumerate() {
            let r = plane.reconstruct(i);
            assert_eq!(r.x.to_bits(), v.x.to_bits());
            assert_eq!(r.y.to_bits(), v.y.to_bits());
            assert_eq!(r.z.to_bits(), v.z.to_bits());
        }
    }

    #[test]
    fn test_restage_with_offset() {
        let input: Vec<Vec3> = (0..10).map(|i| Vec3::splat(i as f32)).collect();

        let mut plane = StagingPlane::new(4);
        plane.restage(&input, 6, 4);

        assert_eq!(plane.reconstruct(0), Vec3::splat(6.0));
        assert_eq!(plane.reconstruct(3), Vec3::splat(9.0));
    }

    #[test]
    fn test_partial_restage_leaves_tail() {
        let mut plane = StagingPlane::new(4);

        let first: Vec<Vec3> = (0..4).map(|i| Vec3::splat(i as f32 + 1.0)).collect();
        plane.restage(&first, 0, 4);

        // Remainder-style restage touches only the first two positions
        let second = vec![Vec3::splat(-1.0), Vec3::splat(-2.0)];
        plane.restage(&second, 0, 2);

        assert_eq!(plane.staged(), 2);
        assert_eq!(plane.reconstruct(0), Vec3::splat(-1.0));
        assert_eq!(plane.reconstruct(1), Vec3::splat(-2.0));

        // Tail still holds the previous tile's data, untouched
        let (x, _, _) = plane.as_axis_runs();
        assert_eq!(x[2], 3.0);
        assert_eq!(x[3], 4.0);
    }

    #[test]
    fn test_writeback_range() {
        let mut out_plane = OutputPlane::new(4);
        for i in 0..4 {
            out_plane.set(i, i as f32 * 10.0);
        }

        let mut dest = vec![0.0f32; 10];
        out_plane.writeback(3, &mut dest, 5);

        assert_eq!(&dest[5..8], &[0.0, 10.0, 20.0]);
        assert_eq!(dest[4], 0.0);
        assert_eq!(dest[8], 0.0);
    }
}
