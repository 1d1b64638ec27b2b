//! Visitor pattern for BSP tree traversal.
//!
//! Visitors allow custom processing of nodes during a pre-order walk
//! without coupling traversal logic to specific use cases.

use super::node::BspNode;

/// Visitor for processing nodes during a pre-order BSP tree walk.
///
/// Common uses include:
/// - Collecting the triangles stored in the tree
/// - Printing the tree shape for diagnostics
pub trait BspVisitor {
    /// Called once per node, parents before children and front before back.
    ///
    /// `depth` is 0 for the root.
    fn visit(&mut self, node: &BspNode, depth: usize);
}

/// A simple visitor that collects the triangle id of every visited node.
///
/// Spanning triangles stored in several nodes are collected once per node.
#[derive(Debug, Default)]
pub struct CollectingVisitor {
    collected: Vec<usize>,
}

impl CollectingVisitor {
    /// Creates a new empty collecting visitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected triangle ids.
    pub fn into_ids(self) -> Vec<usize> {
        self.collected
    }

    /// Returns a reference to the collected triangle ids.
    pub fn ids(&self) -> &[usize] {
        &self.collected
    }
}

impl BspVisitor for CollectingVisitor {
    fn visit(&mut self, node: &BspNode, _depth: usize) {
        self.collected.push(node.triangle_id());
    }
}

/// A visitor that calls a closure for each node.
pub struct FnVisitor<F>
where
    F: FnMut(&BspNode, usize),
{
    func: F,
}

impl<F> FnVisitor<F>
where
    F: FnMut(&BspNode, usize),
{
    /// Creates a new visitor from a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> BspVisitor for FnVisitor<F>
where
    F: FnMut(&BspNode, usize),
{
    fn visit(&mut self, node: &BspNode, depth: usize) {
        (self.func)(node, depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResolvedTriangle;
    use nalgebra::Point3;

    fn make_node(id: usize) -> BspNode {
        BspNode::new(ResolvedTriangle::new(
            id,
            [Point3::new(0, 0, 0), Point3::new(1, 0, 0), Point3::new(0, 1, 0)],
        ))
    }

    #[test]
    fn collecting_visitor_empty() {
        let visitor = CollectingVisitor::new();
        assert!(visitor.ids().is_empty());
    }

    #[test]
    fn collecting_visitor_collects() {
        let mut visitor = CollectingVisitor::new();
        visitor.visit(&make_node(4), 0);
        visitor.visit(&make_node(2), 1);

        assert_eq!(visitor.into_ids(), vec![4, 2]);
    }

    #[test]
    fn fn_visitor_calls_closure() {
        let mut depths = Vec::new();
        {
            let mut visitor = FnVisitor::new(|_: &BspNode, depth: usize| depths.push(depth));
            visitor.visit(&make_node(1), 0);
            visitor.visit(&make_node(1), 3);
        }
        assert_eq!(depths, vec![0, 3]);
    }
}
