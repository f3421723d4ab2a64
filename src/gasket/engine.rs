//! Gasket generation engine
//!
//! Walks the transformation graph from two seed circle nodes, calling a
//! visitor on every node. The traversal uses an explicit LIFO work list
//! rather than recursion, so stack depth stays flat regardless of how deep
//! the packing is refined, and a pruned subtree costs nothing beyond its
//! root node.

use super::canonical::{self, GeneratorId, NodeType};
use super::transform::GasketTransform;
use crate::geometry::circle::REAL_LINE;
use crate::geometry::{GenCircle, Mobius, PComplex};

/// One traversal node: type, accumulated transform and caller payload
#[derive(Debug, Clone)]
pub struct GasketNode<D> {
    /// Whether this is a gap (`A`) or circle (`B`) node
    pub kind: NodeType,
    /// Product of all generator transforms from the root
    pub transform: GasketTransform,
    /// Caller-defined payload propagated by the visitor's `derive`
    pub data: D,
}

impl<D> GasketNode<D> {
    /// The node's associated circle: image of the canonical circle
    ///
    /// For a `B` node this is the circle being painted; for an `A` node it
    /// is the circumcircle bounding the gap and all of its descendants.
    pub fn circle(&self) -> GenCircle {
        self.transform.apply_circle(&REAL_LINE)
    }

    /// Size metric controlling recursion depth
    ///
    /// `B` nodes measure the diameter of their circle (infinite for
    /// half-planes, which are never pruned by size alone). `A` nodes use the
    /// maximum pairwise distance between the images of the three canonical
    /// cusps; this underestimates some stretched triangles, but downstream
    /// output depends on its exact behavior, so it stays as is.
    pub fn size(&self) -> f64 {
        match self.kind {
            NodeType::B => self.circle().diameter(),
            NodeType::A => {
                let m = &self.transform.mobius;
                let w0 = m.v00 / m.v10;
                let w1 = m.v01 / m.v11;
                let w2 = (m.v00 + m.v01) / (m.v10 + m.v11);
                (w0 - w1)
                    .norm()
                    .max((w1 - w2).norm())
                    .max((w2 - w0).norm())
            }
        }
    }
}

/// Visitor interface for the traversal
///
/// `accept` decides whether a node's subtree is expanded; `derive` builds a
/// child payload from its parent before the child is pushed. Parents are
/// always visited before their children; sibling order is unspecified.
pub trait GasketVisitor {
    /// Caller-defined per-node payload
    type Data;

    /// Visit a node; return false to prune its subtree
    fn accept(&mut self, node: &GasketNode<Self::Data>) -> bool;

    /// Build the payload for a child reached along a graph edge
    fn derive(
        &self,
        parent: &GasketNode<Self::Data>,
        target: NodeType,
        id: GeneratorId,
        transform: &GasketTransform,
    ) -> Self::Data;
}

/// The two seed frames for a gasket through the given tangency points
///
/// `t0` sends the canonical boundary points `(∞, 0, 1)` to `(z0, z1, z2)`;
/// the seeds are `t0·p⁻¹` (the packing interior) and `t0·p⁻¹·inv` (its
/// exterior).
pub fn seed_transforms(z0: PComplex, z1: PComplex, z2: PComplex) -> [GasketTransform; 2] {
    let t0 = Mobius::map_triple(
        PComplex::INFINITY,
        PComplex::from(0.0),
        PComplex::from(1.0),
        z0,
        z1,
        z2,
    );
    let base = GasketTransform::from_mobius(t0) * canonical::P.inverse();
    [base, base * canonical::INV]
}

/// Generate the gasket with tangency points `z0, z1, z2`
///
/// `data0` seeds the interior node, `data1` the exterior node. The visitor
/// is called once per traversal node; circles are exactly the `B` nodes.
pub fn generate<V: GasketVisitor>(
    z0: PComplex,
    z1: PComplex,
    z2: PComplex,
    data0: V::Data,
    data1: V::Data,
    visitor: &mut V,
) {
    let [seed0, seed1] = seed_transforms(z0, z1, z2);
    let mut stack: Vec<GasketNode<V::Data>> = Vec::new();
    stack.push(GasketNode {
        kind: NodeType::B,
        transform: seed1,
        data: data1,
    });
    stack.push(GasketNode {
        kind: NodeType::B,
        transform: seed0,
        data: data0,
    });

    while let Some(node) = stack.pop() {
        if !visitor.accept(&node) {
            continue;
        }
        for edge in canonical::edges(node.kind) {
            let transform = node.transform * canonical::generator(edge.id);
            let data = visitor.derive(&node, edge.target, edge.id, &transform);
            stack.push(GasketNode {
                kind: edge.target,
                transform,
                data,
            });
        }
    }
}
