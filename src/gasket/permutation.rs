//! Color-label permutations
//!
//! The complement disks of an Apollonian gasket admit a 4-coloring in which
//! no two tangent disks share a color. Each traversal node carries a
//! permutation of `{0,1,2,3}` mapping canonical labels of its local frame to
//! the color classes of the actual configuration; composing along graph
//! edges keeps the assignment consistent.

/// A bijection on `{0, 1, 2, 3}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permutation4 {
    map: [usize; 4],
}

impl Permutation4 {
    /// The identity permutation
    pub const IDENTITY: Self = Self { map: [0, 1, 2, 3] };

    /// Build from an explicit image array (`map[k]` = image of `k`)
    pub const fn new(map: [usize; 4]) -> Self {
        Self { map }
    }

    /// The transposition exchanging `i` and `j`
    pub fn transposition(i: usize, j: usize) -> Self {
        let mut map = [0, 1, 2, 3];
        for (k, slot) in map.iter_mut().enumerate() {
            if k == i {
                *slot = j;
            } else if k == j {
                *slot = i;
            }
        }
        Self { map }
    }

    /// Image of a label
    pub fn apply(&self, k: usize) -> usize {
        self.map.get(k).copied().unwrap_or(k)
    }

    /// Inverse permutation
    pub fn inverse(&self) -> Self {
        let mut map = [0usize; 4];
        for (k, &image) in self.map.iter().enumerate() {
            if let Some(slot) = map.get_mut(image) {
                *slot = k;
            }
        }
        Self { map }
    }

    /// Standard composition: `self.compose(other)` applies `other` first
    ///
    /// Accumulated along a traversal path by right-multiplication, exactly
    /// like the Möbius matrices: `child = parent.compose(generator)`. Viewed
    /// as array-relabeling operations this is the *opposite* of pointwise
    /// product order; see the composition-order test below.
    pub fn compose(&self, other: &Self) -> Self {
        let mut map = [0usize; 4];
        for (slot, &k) in map.iter_mut().zip(other.map.iter()) {
            *slot = self.apply(k);
        }
        Self { map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transposition_is_self_inverse() {
        let t = Permutation4::transposition(1, 3);
        assert_eq!(t.compose(&t), Permutation4::IDENTITY);
        assert_eq!(t.inverse(), t);
    }

    #[test]
    fn compose_applies_right_factor_first() {
        // The traversal accumulates label maps by right-multiplication, so a
        // path (g then h below it) yields parent.compose(child_generator).
        // With g = (1 3) and h = (2 3): (g∘h)(3) = g(h(3)) = g(2) = 2, i.e.
        // the *opposite* of relabeling-array order, which would give 1.
        let g = Permutation4::transposition(1, 3);
        let h = Permutation4::transposition(2, 3);
        let composed = g.compose(&h);
        assert_eq!(composed.apply(3), 2);
        assert_eq!(composed.apply(2), 1);
        assert_eq!(composed.apply(1), 3);
        assert_eq!(composed.apply(0), 0);
    }

    #[test]
    fn inverse_undoes_composition() {
        let g = Permutation4::new([2, 0, 3, 1]);
        assert_eq!(g.compose(&g.inverse()), Permutation4::IDENTITY);
        assert_eq!(g.inverse().compose(&g), Permutation4::IDENTITY);
    }
}
