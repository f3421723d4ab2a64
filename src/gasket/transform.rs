//! Paired Möbius/permutation transformations
//!
//! Every gasket node accumulates both a Möbius transformation (where the
//! node's geometry lives) and a color-label permutation (which palette slot
//! its circle feeds). The two compose in lockstep by right-multiplication
//! along graph edges.

use super::permutation::Permutation4;
use crate::geometry::{GenCircle, Mobius};
use std::ops::Mul;

/// A Möbius transformation paired with its color-label permutation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasketTransform {
    /// The geometric part
    pub mobius: Mobius,
    /// The color-label part
    pub perm: Permutation4,
}

impl GasketTransform {
    /// The identity pair
    pub const IDENTITY: Self = Self {
        mobius: Mobius::IDENTITY,
        perm: Permutation4::IDENTITY,
    };

    /// Build a pair from its parts
    pub const fn new(mobius: Mobius, perm: Permutation4) -> Self {
        Self { mobius, perm }
    }

    /// Lift a bare Möbius transformation with the identity labeling
    pub const fn from_mobius(mobius: Mobius) -> Self {
        Self::new(mobius, Permutation4::IDENTITY)
    }

    /// Inverse of both parts
    pub fn inverse(&self) -> Self {
        Self::new(self.mobius.inverse(), self.perm.inverse())
    }

    /// Image of a circle under the geometric part
    pub fn apply_circle(&self, circle: &GenCircle) -> GenCircle {
        circle.transformed(&self.mobius)
    }

    /// Palette slot of the circle this frame paints (canonical label 3)
    pub fn color_index(&self) -> usize {
        self.perm.apply(3)
    }
}

impl Mul for GasketTransform {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::new(self.mobius * other.mobius, self.perm.compose(&other.perm))
    }
}
