//! BSP tree node implementation.

use stacker::maybe_grow;

use crate::{Plane, ResolvedTriangle};

use super::tree::{STACK_GROW_SIZE, STACK_RED_ZONE};

/// A node in the BSP tree.
///
/// Each node owns the pivot triangle that defined its splitting plane.
/// Triangles in front of the plane (or coplanar with it) live in the front
/// subtree, triangles behind it in the back subtree, and triangles spanning
/// the plane in both.
///
/// Chains can be as deep as the number of triangles, so the recursive
/// methods, `Clone` and `Drop` never rely on the default thread stack.
#[derive(Debug)]
pub struct BspNode {
    /// The pivot triangle of this node.
    triangle: ResolvedTriangle,

    /// The plane of the pivot triangle.
    plane: Plane,

    /// Subtree partitioning the FRONT half-space.
    front: Option<Box<BspNode>>,

    /// Subtree partitioning the BACK half-space.
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a leaf node for the given pivot triangle.
    pub fn new(triangle: ResolvedTriangle) -> Self {
        let plane = triangle.plane();
        Self {
            triangle,
            plane,
            front: None,
            back: None,
        }
    }

    /// Returns the pivot triangle.
    #[inline]
    pub fn triangle(&self) -> &ResolvedTriangle {
        &self.triangle
    }

    /// Returns the 1-based id of the pivot triangle.
    #[inline]
    pub fn triangle_id(&self) -> usize {
        self.triangle.id()
    }

    /// Returns a reference to the splitting plane.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Returns a reference to the front child subtree.
    #[inline]
    pub fn front(&self) -> Option<&BspNode> {
        self.front.as_deref()
    }

    /// Returns a reference to the back child subtree.
    #[inline]
    pub fn back(&self) -> Option<&BspNode> {
        self.back.as_deref()
    }

    #[inline]
    pub(crate) fn set_front(&mut self, node: Option<BspNode>) {
        self.front = node.map(Box::new);
    }

    #[inline]
    pub(crate) fn set_back(&mut self, node: Option<BspNode>) {
        self.back = node.map(Box::new);
    }

    /// Checks if this node has any children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.front.is_none() && self.back.is_none()
    }

    /// Returns the number of nodes in this subtree, counting duplicated
    /// spanning triangles once per node.
    pub fn node_count(&self) -> usize {
        maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            let front_count = self.front().map_or(0, BspNode::node_count);
            let back_count = self.back().map_or(0, BspNode::node_count);
            1 + front_count + back_count
        })
    }

    /// Returns the depth of this subtree (1 for a leaf node).
    pub fn depth(&self) -> usize {
        maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
            let front_depth = self.front().map_or(0, BspNode::depth);
            let back_depth = self.back().map_or(0, BspNode::depth);
            1 + front_depth.max(back_depth)
        })
    }
}

impl Clone for BspNode {
    fn clone(&self) -> Self {
        maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || Self {
            triangle: self.triangle.clone(),
            plane: self.plane,
            front: self.front.clone(),
            back: self.back.clone(),
        })
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        // Detach children first so each node is dropped as a leaf.
        let mut pending: Vec<Box<BspNode>> = Vec::new();
        pending.extend(self.front.take());
        pending.extend(self.back.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.front.take());
            pending.extend(node.back.take());
        }
    }
}
