//! BSP (Binary Space Partitioning) tree over integer triangles, answering
//! segment-intersection queries.

pub mod bsp;
mod data;
mod error;
pub mod planar;
mod plane;
mod segment;
mod triangle;

pub use bsp::{BspNode, BspTree, BspVisitor, FirstTriangle, PlaneSelector};
pub use data::{BspData, format_hits, process_segments};
pub use error::BspError;
pub use plane::{Classification, MAX_COORDINATE, Plane, PlaneSide};
pub use segment::{Segment, segment_intersects_triangle};
pub use triangle::{ResolvedTriangle, Triangle};
