//! Algebra of the extended complex plane
//!
//! This module contains the arithmetic foundation of the gasket generator:
//! - Projective complex numbers (points of the Riemann sphere)
//! - Möbius transformations as 2×2 complex matrices
//! - Generalized circles as Hermitian quadratic forms
//! - Axis-aligned boxes and their classification against circles

/// Generalized circles, disks, half-planes and their complements
pub mod circle;
/// Projective complex numbers over the extended plane
pub mod complex;
/// Möbius transformations and the cross-ratio construction
pub mod mobius;
/// Axis-aligned boxes and viewport classification
pub mod rect;

pub use circle::GenCircle;
pub use complex::PComplex;
pub use mobius::Mobius;
pub use rect::{Intersection, Rect};
