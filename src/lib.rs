//! Apollonian gasket generation and rendering
//!
//! The crate builds an Apollonian gasket by recursively applying a small set
//! of Möbius transformations to a canonical seed configuration, and rasters
//! the resulting circle packing with exact-area antialiasing. Rendering is
//! tiled: independent worker threads each run the full generation pipeline
//! against their own image cell and merge results into the shared buffer.

#![deny(unsafe_code)]

/// Gasket generation: permutation labels, transformation pairs, the canonical
/// generator set and the traversal engine
pub mod gasket;
/// Projective complex numbers, Möbius transformations and generalized circles
pub mod geometry;
/// Input/output operations and error handling
pub mod io;
/// Rasterization, color mixing and the tiled parallel renderer
pub mod render;

pub use io::error::{RenderError, Result};
