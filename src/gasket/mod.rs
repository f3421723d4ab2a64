//! Gasket generation
//!
//! This module contains everything between the raw Möbius algebra and the
//! renderer: the color-label permutations, the paired transformations they
//! form with Möbius matrices, the canonical generator set and transformation
//! graph, and the explicit-stack traversal engine that enumerates gasket
//! regions.

/// Canonical generators, tangency points and the transformation graph
pub mod canonical;
/// Explicit-stack traversal of the transformation graph
pub mod engine;
/// Order-4 permutations tracking circle color labels
pub mod permutation;
/// Paired Möbius/permutation transformations
pub mod transform;

pub use canonical::{GeneratorId, NodeType};
pub use engine::{generate, GasketNode, GasketVisitor};
pub use permutation::Permutation4;
pub use transform::GasketTransform;
