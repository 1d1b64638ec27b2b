//! BSP tree container, construction and segment queries.

use std::collections::BTreeSet;

use nalgebra::Point3;
use stacker::maybe_grow;

use crate::{BspError, Classification, PlaneSide, ResolvedTriangle, Segment, Triangle};

use super::node::BspNode;
use super::selector::{FirstTriangle, PlaneSelector};
use super::visitor::{BspVisitor, CollectingVisitor, FnVisitor};

/// Remaining stack below which recursive build/query steps grow the stack.
pub const STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment allocated by `stacker`.
pub const STACK_GROW_SIZE: usize = 1024 * 1024;

/// A Binary Space Partitioning tree over indexed triangles.
///
/// Each node holds one pivot triangle and the plane through it. Triangles in
/// front of the plane or coplanar with it go to the front subtree, triangles
/// behind it to the back subtree. Triangles that span the plane are not
/// split; they are stored in both subtrees instead.
///
/// # Construction
///
/// ```ignore
/// use tri_bsp::{BspTree, Triangle};
/// use nalgebra::Point3;
///
/// let points = vec![Point3::new(0, 0, 0), Point3::new(4, 0, 0), Point3::new(0, 4, 0)];
/// let tree = BspTree::from_triangles(&[Triangle::new(1, 2, 3)], &points)?;
/// ```
///
/// # Queries
///
/// [`BspTree::intersections`] returns the ascending 1-based ids of the
/// triangles a segment touches. The tree is never modified after
/// construction, so it can be shared between threads for read-only queries.
#[derive(Debug, Clone, Default)]
pub struct BspTree {
    root: Option<BspNode>,
}

impl BspTree {
    /// Creates an empty BSP tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a BSP tree from indexed triangles.
    ///
    /// Uses the provided [`PlaneSelector`] to choose the pivot of every
    /// working set. Degenerate triangles are kept in the tree but logged,
    /// since they never intersect anything.
    ///
    /// # Errors
    /// Returns [`BspError::InvalidTriangleIndex`] if any triangle references a
    /// point outside `points`. No tree is built in that case.
    pub fn build<S: PlaneSelector>(
        triangles: &[Triangle],
        points: &[Point3<i64>],
        selector: &S,
    ) -> Result<Self, BspError> {
        let resolved = triangles
            .iter()
            .enumerate()
            .map(|(i, triangle)| triangle.resolve(i + 1, points))
            .collect::<Result<Vec<_>, _>>()?;

        for triangle in resolved.iter().filter(|t| t.is_degenerate()) {
            log::warn!(
                "triangle {} has zero area and will never be reported as intersected",
                triangle.id()
            );
        }

        let tree = Self {
            root: build_node((0..resolved.len()).collect(), &resolved, selector),
        };
        log::debug!(
            "built BSP tree over {} triangles: {} nodes, depth {}",
            resolved.len(),
            tree.node_count(),
            tree.depth()
        );
        Ok(tree)
    }

    /// Builds a BSP tree using the default selector ([`FirstTriangle`]).
    pub fn from_triangles(
        triangles: &[Triangle],
        points: &[Point3<i64>],
    ) -> Result<Self, BspError> {
        Self::build(triangles, points, &FirstTriangle)
    }

    /// Returns `true` if the tree has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, if any.
    #[inline]
    pub fn root(&self) -> Option<&BspNode> {
        self.root.as_ref()
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.root.as_ref().map_or(0, BspNode::node_count)
    }

    /// Returns the maximum depth of the tree (0 for empty tree).
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, BspNode::depth)
    }

    /// Returns the distinct ids of all triangles stored in the tree.
    pub fn triangle_ids(&self) -> BTreeSet<usize> {
        let mut visitor = CollectingVisitor::new();
        self.walk(&mut visitor);
        visitor.into_ids().into_iter().collect()
    }

    /// Visits every node in pre-order: node, front subtree, back subtree.
    pub fn walk<V: BspVisitor>(&self, visitor: &mut V) {
        if let Some(ref root) = self.root {
            walk_node(root, 0, visitor);
        }
    }

    /// Collects the 1-based ids of all triangles the segment touches.
    pub fn query(&self, segment: &Segment) -> BTreeSet<usize> {
        self.root
            .as_ref()
            .map_or_else(BTreeSet::new, |root| query_node(root, segment))
    }

    /// Returns the ids from [`BspTree::query`] as an ascending list.
    pub fn intersections(&self, segment: &Segment) -> Vec<usize> {
        self.query(segment).into_iter().collect()
    }

    /// Answers every segment independently, preserving input order.
    pub fn process_segments(&self, segments: &[Segment]) -> Vec<Vec<usize>> {
        segments
            .iter()
            .map(|segment| self.intersections(segment))
            .collect()
    }

    /// Renders the tree shape, one node per line, indented two spaces per
    /// level.
    pub fn describe(&self) -> String {
        let mut out = format!(
            "BSP tree (nodes: {}, depth: {}):\n",
            self.node_count(),
            self.depth()
        );
        self.walk(&mut FnVisitor::new(|node: &BspNode, depth: usize| {
            out.push_str(&format!(
                "{:indent$}Node at depth {}: triangle {}\n",
                "",
                depth,
                node.triangle_id(),
                indent = depth * 2
            ));
        }));
        out
    }
}

/// Recursively builds a BSP node from a working set of positions into
/// `triangles`.
fn build_node<S: PlaneSelector>(
    mut working: Vec<usize>,
    triangles: &[ResolvedTriangle],
    selector: &S,
) -> Option<BspNode> {
    maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, move || {
        let pivot = working.remove(selector.select(&working, triangles)?);
        let mut node = BspNode::new(triangles[pivot].clone());
        let plane = *node.plane();

        let mut front_list = Vec::new();
        let mut back_list = Vec::new();

        // Remaining triangles keep their input order.
        for index in working {
            match triangles[index].classify(&plane) {
                Classification::Front | Classification::Coplanar => front_list.push(index),
                Classification::Back => back_list.push(index),
                Classification::Spanning => {
                    front_list.push(index);
                    back_list.push(index);
                }
            }
        }

        node.set_front(build_node(front_list, triangles, selector));
        node.set_back(build_node(back_list, triangles, selector));

        Some(node)
    })
}

fn walk_node<V: BspVisitor>(node: &BspNode, depth: usize, visitor: &mut V) {
    maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
        visitor.visit(node, depth);
        if let Some(front) = node.front() {
            walk_node(front, depth + 1, visitor);
        }
        if let Some(back) = node.back() {
            walk_node(back, depth + 1, visitor);
        }
    })
}

/// Queries a node subtree, merging the hits of the visited children.
fn query_node(node: &BspNode, segment: &Segment) -> BTreeSet<usize> {
    maybe_grow(STACK_RED_ZONE, STACK_GROW_SIZE, || {
        let mut hits = BTreeSet::new();
        if segment.intersects_triangle(node.triangle()) {
            hits.insert(node.triangle_id());
        }

        let start = node.plane().classify_point(segment.start);
        let end = node.plane().classify_point(segment.end);
        let straddles = matches!(
            (start, end),
            (PlaneSide::Front, PlaneSide::Back) | (PlaneSide::Back, PlaneSide::Front)
        );
        let visit_front = straddles || (start != PlaneSide::Back && end != PlaneSide::Back);
        let visit_back = straddles || (start != PlaneSide::Front && end != PlaneSide::Front);

        log::trace!(
            "node {}: endpoints {:?}/{:?}, front: {}, back: {}",
            node.triangle_id(),
            start,
            end,
            visit_front,
            visit_back
        );

        if visit_front {
            if let Some(front) = node.front() {
                hits.extend(query_node(front, segment));
            }
        }
        if visit_back {
            if let Some(back) = node.back() {
                hits.extend(query_node(back, segment));
            }
        }

        hits
    })
}
