//! # vectile
//!
//! Micro-benchmarks for elementwise transforms over large arrays of
//! 3-component vectors, built around a tiled AoS -> SoA staged execution
//! engine.
//!
//! The flat benchmarks (dot, cross) time a plain loop over interleaved
//! vectors. The tile engine restructures the same class of computation:
//! each tile of input is staged into contiguous per-axis component runs,
//! a dependency-free inner loop applies the transform, and the scalar
//! results are flushed back. The staging exposes the independence
//! between elements that a compiler auto-vectorizer needs.
//!
//! ## Example
//!
//! ```rust
//! use vectile::prelude::*;
//!
//! // Input vectors carrying their own index in every component
//! let input = generate_index_vectors(10);
//!
//! // Tiled component sum: 2 full tiles of 4, one remainder tile of 2
//! let mut engine = TileEngine::new(4).unwrap();
//! let output = engine.run(&input, &ComponentSum);
//!
//! // Each result is 3x its index
//! assert_eq!(check_scalars(&output, |i| 3.0 * i as f32, 0.0), 0);
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod check;
pub mod harness;
pub mod stage;
pub mod tile;
pub mod transform;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::check::{check_scalars, check_vectors};
    pub use crate::harness::{
        generate_gradient_vectors, generate_index_vectors, run_timed, BenchConfig, HarnessError,
        Timings,
    };
    pub use crate::stage::{OutputPlane, StagingPlane};
    pub use crate::tile::{inner_loop, TileEngine, TileError};
    pub use crate::transform::{
        apply_flat, ComponentSum, CrossProduct, DotProduct, ElementwiseTransform,
        PairwiseTransform,
    };
    pub use glam::Vec3;
}

// Re-exports for convenience
pub use tile::TileEngine;
pub use transform::{ComponentSum, CrossProduct, DotProduct};
