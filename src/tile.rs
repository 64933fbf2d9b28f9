//! Tiled staged execution engine
//!
//! Partitions the input array into fixed-size tiles, stages each tile
//! AoS -> SoA, runs the elementwise transform over the staged plane, and
//! flushes the scalar results back. The inner loop is strictly
//! sequential with no cross-iteration dependency, which is the shape a
//! compiler auto-vectorizer collapses into a single vector instruction
//! sequence.
//!
//! Tiles are disjoint index ranges, so every output position is written
//! exactly once. `L / T` full tiles run first; a final remainder tile of
//! `L % T` elements runs only when the remainder is non-zero.
//!
//! Author: Moroya Sakamoto

use crate::stage::{OutputPlane, StagingPlane};
use crate::transform::ElementwiseTransform;
use glam::Vec3;
use thiserror::Error;

/// Tile engine construction errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// Tile size must be at least 1
    #[error("tile size must be at least 1")]
    ZeroTileSize,
}

/// Run the transform over the first `bound` staged elements
///
/// For each `i` in `[0, bound)`: rebuild the vector from the component
/// runs, apply the transform, store the scalar at `out[i]`. This is the
/// auto-vectorization unit; `bound` is the full tile size except on the
/// remainder tile.
#[inline]
pub fn inner_loop<F: ElementwiseTransform>(
    plane: &StagingPlane,
    out: &mut OutputPlane,
    bound: usize,
    transform: &F,
) {
    debug_assert!(bound <= plane.staged());
    for i in 0..bound {
        let v = plane.reconstruct(i);
        out.set(i, transform.apply(v));
    }
}

/// Tiling controller
///
/// Owns the tile size and both per-tile planes; the planes are allocated
/// once and reused for every tile of every run.
///
/// # Example
/// ```rust
/// use vectile::prelude::*;
///
/// let input: Vec<Vec3> = (0..10).map(|i| Vec3::splat(i as f32)).collect();
/// let mut engine = TileEngine::new(4).unwrap();
/// let output = engine.run(&input, &ComponentSum);
///
/// assert_eq!(output[9], 27.0);
/// ```
#[derive(Debug, Clone)]
pub struct TileEngine {
    tile_size: usize,
    plane: StagingPlane,
    out_plane: OutputPlane,
}

impl TileEngine {
    /// Create an engine with the given tile size
    ///
    /// # Errors
    /// Returns [`TileError::ZeroTileSize`] if `tile_size` is zero. A
    /// tile size larger than the input is valid: the run degenerates to
    /// a single remainder tile.
    pub fn new(tile_size: usize) -> Result<Self, TileError> {
        if tile_size == 0 {
            return Err(TileError::ZeroTileSize);
        }
        Ok(Self {
            tile_size,
            plane: StagingPlane::new(tile_size),
            out_plane: OutputPlane::new(tile_size),
        })
    }

    /// Configured tile size
    #[inline]
    pub fn tile_size(&self) -> usize {
        self.tile_size
    }

    /// Transform every input vector, tile by tile
    ///
    /// Equivalent to applying `transform` directly to each element; the
    /// tiling changes only the data layout the inner loop reads from.
    ///
    /// # Arguments
    /// * `input` - Vectors to transform (read-only, any length)
    /// * `transform` - Elementwise transform applied once per element
    ///
    /// # Returns
    /// Scalar results, one per input element, in input order.
    pub fn run<F: ElementwiseTransform>(&mut self, input: &[Vec3], transform: &F) -> Vec<f32> {
        let len = input.len();
        let t = self.tile_size;
        let mut output = vec![0.0f32; len];

        let num_full_tiles = len / t;
        let remainder = len % t;

        for tile_index in 0..num_full_tiles {
            let offset = tile_index * t;
            self.plane.restage(input, offset, t);
            inner_loop(&self.plane, &mut self.out_plane, t, transform);
            self.out_plane.writeback(t, &mut output, offset);
        }

        // Remainder tile; skipped entirely when the tile size divides
        // the input length.
        if remainder > 0 {
            let offset = num_full_tiles * t;
            self.plane.restage(input, offset, remainder);
            inner_loop(&self.plane, &mut self.out_plane, remainder, transform);
            self.out_plane.writeback(remainder, &mut output, offset);
        }

        output
    }
}
