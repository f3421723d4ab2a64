//! The canonical gasket configuration and its generator set
//!
//! All gaskets are images of one canonical configuration under a Möbius
//! transformation. The canonical picture lives on the upper half-plane H,
//! bounded by the real line (the canonical circle, label 3):
//!
//! - boundary tangency points `a0 = ∞`, `a1 = 0`, `a2 = 1`;
//! - three disks inscribed in H, mutually tangent and tangent to the real
//!   line at the `a` points: `D0 = {y ≥ 1}` (label 0), `D1 = |z−i/2| ≤ 1/2`
//!   (label 1), `D2 = |z−1−i/2| ≤ 1/2` (label 2);
//! - inner tangency points `b0 = (1+i)/2 = D1∧D2`, `b1 = 1+i = D0∧D2`,
//!   `b2 = i = D0∧D1`;
//! - the curvilinear triangle `T` with cusps `(a0, a1, a2)`, bounded by the
//!   lines `x = 0`, `x = 1` and the circle `|z−1/2| = 1/2`.
//!
//! A `B` node is a circle region: its frame maps H onto the disk it paints.
//! An `A` node is a triangle gap: its frame maps `T` onto the gap, and the
//! canonical circle to the gap's circumcircle (the circle through its three
//! cusps). The circumcircle bounds everything the node can ever paint,
//! which is what makes viewport pruning sound.
//!
//! The seven generators subdivide these regions:
//!
//! - `m0, m1, m2` (parabolic) map H onto the nested disks `D0, D1, D2`
//!   of a circle node, and simultaneously map `T` onto its three sub-gaps
//!   around the inscribed circle;
//! - `n0, n1, n2` (order-4 elliptic) map `T` onto the three peripheral gaps
//!   of a circle node;
//! - `p` (fixed-point-squeezing) maps `(a0, a1, a2)` to `(b0, b1, b2)`: it
//!   sends H onto the inscribed disk of `T` (the `A → B` edge) and `T` onto
//!   the central gap between `D0, D1, D2` (the `B → A` edge);
//! - `inv` (involution, `z ↦ 1/z`) exchanges the two sides of the canonical
//!   circle; composed into one seed it yields the packing's exterior.
//!
//! These are pure mathematical constants; the permutations record how each
//! generator relabels the four color classes.

use super::permutation::Permutation4;
use super::transform::GasketTransform;
use crate::geometry::Mobius;
use num_complex::Complex64;

/// Node types of the transformation graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// A curvilinear-triangle gap region
    A,
    /// A circle region
    B,
}

/// Names of the seven graph generators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorId {
    /// Parabolic, upper disk / upper sub-gap
    M0,
    /// Parabolic, lower-left disk / sub-gap
    M1,
    /// Parabolic, lower-right disk / sub-gap
    M2,
    /// Elliptic, bottom peripheral gap
    N0,
    /// Elliptic, right peripheral gap
    N1,
    /// Elliptic, left peripheral gap
    N2,
    /// Type-flipping squeeze onto the inscribed disk / central gap
    P,
}

/// One outgoing edge of the transformation graph
#[derive(Debug, Clone, Copy)]
pub struct GraphEdge {
    /// Node type the edge leads to
    pub target: NodeType,
    /// Generator applied along the edge
    pub id: GeneratorId,
}

const I: Complex64 = Complex64::new(0.0, 1.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const TWO: Complex64 = Complex64::new(2.0, 0.0);
const ZERO: Complex64 = Complex64::ZERO;
const ONE_PLUS_I: Complex64 = Complex64::new(1.0, 1.0);

/// `z ↦ z + i`
pub const M0: GasketTransform = GasketTransform::new(
    Mobius::new(ONE, I, ZERO, ONE),
    Permutation4::new([3, 1, 2, 0]),
);

/// `z ↦ iz/(z + i)`, parabolic at 0
pub const M1: GasketTransform = GasketTransform::new(
    Mobius::new(I, ZERO, ONE, I),
    Permutation4::new([0, 3, 2, 1]),
);

/// Parabolic at 1
pub const M2: GasketTransform = GasketTransform::new(
    Mobius::new(ONE_PLUS_I, Complex64::new(-1.0, 0.0), ONE, Complex64::new(-1.0, 1.0)),
    Permutation4::new([0, 1, 3, 2]),
);

/// Quarter turn about the axis through 0 and 1
pub const N0: GasketTransform = GasketTransform::new(
    Mobius::new(ONE_PLUS_I, ZERO, TWO, Complex64::new(-1.0, 1.0)),
    Permutation4::new([3, 2, 1, 0]),
);

/// `z ↦ −iz + 1 + i`, quarter turn about 1
pub const N1: GasketTransform = GasketTransform::new(
    Mobius::new(Complex64::new(0.0, -1.0), ONE_PLUS_I, ZERO, ONE),
    Permutation4::new([2, 3, 0, 1]),
);

/// `z ↦ iz`, quarter turn about 0
pub const N2: GasketTransform = GasketTransform::new(
    Mobius::new(I, ZERO, ZERO, ONE),
    Permutation4::new([1, 0, 3, 2]),
);

/// Sends `(a0, a1, a2)` to `(b0, b1, b2)`
pub const P: GasketTransform = GasketTransform::new(
    Mobius::new(ONE_PLUS_I, Complex64::new(-2.0, 0.0), TWO, Complex64::new(-1.0, 1.0)),
    Permutation4::IDENTITY,
);

/// `z ↦ 1/z`
pub const INV: GasketTransform = GasketTransform::new(
    Mobius::new(ZERO, ONE, ONE, ZERO),
    Permutation4::new([1, 0, 2, 3]),
);

/// Outgoing edges of an `A` node
pub const EDGES_A: [GraphEdge; 4] = [
    GraphEdge {
        target: NodeType::A,
        id: GeneratorId::M0,
    },
    GraphEdge {
        target: NodeType::A,
        id: GeneratorId::M1,
    },
    GraphEdge {
        target: NodeType::A,
        id: GeneratorId::M2,
    },
    GraphEdge {
        target: NodeType::B,
        id: GeneratorId::P,
    },
];

/// Outgoing edges of a `B` node
pub const EDGES_B: [GraphEdge; 7] = [
    GraphEdge {
        target: NodeType::B,
        id: GeneratorId::M0,
    },
    GraphEdge {
        target: NodeType::B,
        id: GeneratorId::M1,
    },
    GraphEdge {
        target: NodeType::B,
        id: GeneratorId::M2,
    },
    GraphEdge {
        target: NodeType::A,
        id: GeneratorId::N0,
    },
    GraphEdge {
        target: NodeType::A,
        id: GeneratorId::N1,
    },
    GraphEdge {
        target: NodeType::A,
        id: GeneratorId::N2,
    },
    GraphEdge {
        target: NodeType::A,
        id: GeneratorId::P,
    },
];

/// Look up a generator by edge id
pub const fn generator(id: GeneratorId) -> GasketTransform {
    match id {
        GeneratorId::M0 => M0,
        GeneratorId::M1 => M1,
        GeneratorId::M2 => M2,
        GeneratorId::N0 => N0,
        GeneratorId::N1 => N1,
        GeneratorId::N2 => N2,
        GeneratorId::P => P,
    }
}

/// Edges leaving a node of the given type
pub const fn edges(node: NodeType) -> &'static [GraphEdge] {
    match node {
        NodeType::A => &EDGES_A,
        NodeType::B => &EDGES_B,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::circle::REAL_LINE;
    use crate::geometry::PComplex;

    const A0: PComplex = PComplex::INFINITY;

    fn a1() -> PComplex {
        PComplex::from(Complex64::ZERO)
    }

    fn a2() -> PComplex {
        PComplex::from(ONE)
    }

    fn assert_maps(m: &Mobius, z: PComplex, w: Complex64) {
        let image = m.apply(z);
        assert!(
            (image.value() - w).norm() < 1e-12,
            "expected {w}, got {}",
            image.value()
        );
    }

    fn assert_maps_to_infinity(m: &Mobius, z: PComplex) {
        let image = m.apply(z);
        assert!(image.den.norm() < 1e-12 * image.num.norm());
    }

    // The generators are the memoized form of the maps determined by the six
    // canonical tangency points; these tests re-derive each one.

    #[test]
    fn m_generators_map_cusps_to_sub_gap_cusps() {
        let b0 = Complex64::new(0.5, 0.5);
        let b1 = Complex64::new(1.0, 1.0);
        let b2 = Complex64::new(0.0, 1.0);

        // m0: (a0, a1, a2) -> (a0, b2, b1)
        assert_maps_to_infinity(&M0.mobius, A0);
        assert_maps(&M0.mobius, a1(), b2);
        assert_maps(&M0.mobius, a2(), b1);
        // m1: (a0, a1, a2) -> (b2, a1, b0)
        assert_maps(&M1.mobius, A0, b2);
        assert_maps(&M1.mobius, a1(), Complex64::ZERO);
        assert_maps(&M1.mobius, a2(), b0);
        // m2: (a0, a1, a2) -> (b1, b0, a2)
        assert_maps(&M2.mobius, A0, b1);
        assert_maps(&M2.mobius, a1(), b0);
        assert_maps(&M2.mobius, a2(), ONE);
    }

    #[test]
    fn m_generators_are_parabolic() {
        for g in [M0, M1, M2] {
            let m = g.mobius;
            let tr = m.v00 + m.v11;
            // tr² == 4·det characterizes parabolic transformations
            assert!((tr * tr - 4.0 * m.det()).norm() < 1e-12);
        }
    }

    #[test]
    fn n_generators_have_order_four() {
        for g in [N0, N1, N2] {
            let m = g.mobius;
            let tr = m.v00 + m.v11;
            // tr²/det == 2 characterizes rotation by a quarter turn
            assert!((tr * tr - 2.0 * m.det()).norm() < 1e-12);
            // Fourth power is a scalar matrix
            let m4 = m * m * m * m;
            assert!(m4.v01.norm() < 1e-12 && m4.v10.norm() < 1e-12);
            assert!((m4.v00 - m4.v11).norm() < 1e-12);
        }
    }

    #[test]
    fn p_squeezes_cusps_onto_inner_tangency_points() {
        assert_maps(&P.mobius, A0, Complex64::new(0.5, 0.5));
        assert_maps(&P.mobius, a1(), Complex64::new(1.0, 1.0));
        assert_maps(&P.mobius, a2(), Complex64::new(0.0, 1.0));
    }

    #[test]
    fn p_maps_the_half_plane_onto_the_inscribed_disk() {
        let disk = REAL_LINE.transformed(&P.mobius);
        assert!((disk.center() - Complex64::new(0.5, 1.0)).norm() < 1e-12);
        assert!((disk.radius() - 0.5).abs() < 1e-12);
        // Interior maps to interior
        assert!(disk.form_at(Complex64::new(0.5, 1.0)) < 0.0);
    }

    #[test]
    fn m_generators_map_the_half_plane_onto_the_nested_disks() {
        let expected = [
            // m0 image is the half-plane y >= 1, still a "line" form
            None,
            Some((Complex64::new(0.0, 0.5), 0.5)),
            Some((Complex64::new(1.0, 0.5), 0.5)),
        ];
        for (g, want) in [M0, M1, M2].iter().zip(expected) {
            let c = REAL_LINE.transformed(&g.mobius);
            match want {
                None => {
                    assert!(c.is_half_plane());
                    // Inside is y >= 1
                    assert!(c.form_at(Complex64::new(0.3, 2.0)) < 0.0);
                    assert!(c.form_at(Complex64::new(0.3, 0.5)) > 0.0);
                }
                Some((center, radius)) => {
                    assert!((c.center() - center).norm() < 1e-12);
                    assert!((c.radius() - radius).abs() < 1e-12);
                    assert!(c.form_at(center) < 0.0);
                }
            }
        }
    }

    #[test]
    fn n_generators_map_the_canonical_circle_onto_the_gap_circumcircles() {
        // n0 -> circle |z - 1/2| = 1/2, n1 -> line x = 1, n2 -> line x = 0
        let c0 = REAL_LINE.transformed(&N0.mobius);
        assert!((c0.center() - Complex64::new(0.5, 0.0)).norm() < 1e-12);
        assert!((c0.radius() - 0.5).abs() < 1e-12);

        let c1 = REAL_LINE.transformed(&N1.mobius);
        assert!(c1.is_half_plane());
        assert!(c1.form_at(Complex64::new(2.0, 0.0)) < 0.0);
        assert!(c1.form_at(Complex64::new(0.0, 0.0)) > 0.0);

        let c2 = REAL_LINE.transformed(&N2.mobius);
        assert!(c2.is_half_plane());
        assert!(c2.form_at(Complex64::new(-1.0, 0.0)) < 0.0);
        assert!(c2.form_at(Complex64::new(1.0, 0.0)) > 0.0);
    }

    #[test]
    fn inv_swaps_the_sides_of_the_canonical_circle() {
        let flipped = REAL_LINE.transformed(&INV.mobius);
        assert!(flipped.is_half_plane());
        assert!(flipped.form_at(Complex64::new(0.0, -1.0)) < 0.0);
        assert!(flipped.form_at(Complex64::new(0.0, 1.0)) > 0.0);
        let square = INV.mobius * INV.mobius;
        assert!((square.v00 - square.v11).norm() < 1e-12);
        assert!(square.v01.norm() < 1e-12);
    }

    #[test]
    fn every_generator_permutation_matches_its_disk_relabeling() {
        // The painted circle of a child frame carries canonical label 3;
        // m_k hands it the parent's label k, n_k the label k as well.
        for (g, label) in [(M0, 0), (M1, 1), (M2, 2)] {
            assert_eq!(g.perm.apply(3), label);
        }
        for (g, label) in [(N0, 0), (N1, 1), (N2, 2)] {
            assert_eq!(g.perm.apply(3), label);
        }
        assert_eq!(P.perm.apply(3), 3);
        assert_eq!(INV.perm.apply(3), 3);
    }
}
