//! Pivot selection strategies for BSP tree construction.
//!
//! The choice of pivot decides the splitting plane at each node and with it
//! the shape of the tree. Spanning triangles are duplicated into both
//! subtrees, so a poor pivot also grows the tree.

use crate::ResolvedTriangle;

/// Strategy for selecting which triangle's plane splits a working set.
pub trait PlaneSelector {
    /// Select a pivot from `candidates`, a working set of positions into
    /// `triangles`.
    ///
    /// Returns the position of the pivot within `candidates`, or `None` if
    /// `candidates` is empty.
    fn select(&self, candidates: &[usize], triangles: &[ResolvedTriangle]) -> Option<usize>;
}

/// Selects the first triangle of the working set.
///
/// Deterministic and cheap, but the tree shape follows input order: sorted
/// or adversarial inputs can produce a chain of depth O(n).
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstTriangle;

impl PlaneSelector for FirstTriangle {
    fn select(&self, candidates: &[usize], _triangles: &[ResolvedTriangle]) -> Option<usize> {
        if candidates.is_empty() { None } else { Some(0) }
    }
}
