//! Binary Space Partitioning tree over indexed triangles.
//!
//! This module builds a BSP tree from triangles that reference a shared
//! integer point array, and walks it to find which triangles a segment
//! touches. The tree enables:
//!
//! - Segment queries that skip half-spaces the segment cannot reach
//! - Pre-order inspection of the tree shape for diagnostics
//!
//! # Example
//!
//! ```ignore
//! use tri_bsp::{BspTree, Segment, Triangle};
//! use nalgebra::Point3;
//!
//! let points = vec![
//!     Point3::new(0, 0, 0),
//!     Point3::new(4, 0, 0),
//!     Point3::new(4, 4, 0),
//!     Point3::new(0, 4, 0),
//! ];
//! let triangles = vec![Triangle::new(1, 2, 3), Triangle::new(1, 3, 4)];
//! let tree = BspTree::from_triangles(&triangles, &points)?;
//!
//! let probe = Segment::new(Point3::new(2, 2, -1), Point3::new(2, 2, 1));
//! assert_eq!(tree.intersections(&probe), vec![1, 2]);
//! ```
//!
//! # Architecture
//!
//! - [`BspTree`]: The main container holding the root node
//! - [`BspNode`]: Nodes storing a pivot triangle and its plane
//! - [`PlaneSelector`]: Strategy trait for choosing pivots
//! - [`BspVisitor`]: Visitor trait for walking the tree

mod node;
mod selector;
mod tree;
mod visitor;

// Re-export main types
pub use node::BspNode;
pub use selector::{FirstTriangle, PlaneSelector};
pub use tree::{BspTree, STACK_GROW_SIZE, STACK_RED_ZONE};
pub use visitor::{BspVisitor, CollectingVisitor, FnVisitor};
