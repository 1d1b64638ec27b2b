//! Input collections, the text reader and result formatting.

use std::str::{FromStr, SplitWhitespace};

use nalgebra::Point3;

use crate::{BspError, BspTree, MAX_COORDINATE, Segment, Triangle};

/// The three input collections: points, triangles and probe segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BspData {
    pub points: Vec<Point3<i64>>,
    pub triangles: Vec<Triangle>,
    pub segments: Vec<Segment>,
}

impl BspData {
    /// Parses whitespace-separated integers.
    ///
    /// The layout is `n t l`, then `n` point triples, `t` triples of 1-based
    /// point indices and `l` segments of six coordinates each. Tokens after
    /// the last segment are ignored. Coordinates beyond ±[`MAX_COORDINATE`]
    /// are rejected. Indices are not range-checked here; that happens when
    /// the tree is built.
    pub fn parse(input: &str) -> Result<Self, BspError> {
        let mut tokens = Tokens::new(input);

        let point_count: usize = tokens.next("point count")?;
        let triangle_count: usize = tokens.next("triangle count")?;
        let segment_count: usize = tokens.next("segment count")?;

        let points = (0..point_count)
            .map(|_| tokens.point("point coordinates"))
            .collect::<Result<Vec<_>, _>>()?;

        let triangles = (0..triangle_count)
            .map(|_| -> Result<Triangle, BspError> {
                Ok(Triangle::new(
                    tokens.next("triangle index")?,
                    tokens.next("triangle index")?,
                    tokens.next("triangle index")?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let segments = (0..segment_count)
            .map(|_| -> Result<Segment, BspError> {
                Ok(Segment::new(
                    tokens.point("segment start")?,
                    tokens.point("segment end")?,
                ))
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::debug!(
            "parsed {} points, {} triangles, {} segments",
            points.len(),
            triangles.len(),
            segments.len()
        );

        Ok(Self {
            points,
            triangles,
            segments,
        })
    }

    /// Builds a tree over all triangles using the default selector.
    pub fn build_tree(&self) -> Result<BspTree, BspError> {
        BspTree::from_triangles(&self.triangles, &self.points)
    }

    /// Lists the points, one `(x, y, z)` per line.
    pub fn describe_points(&self) -> String {
        let mut out = format!("Points (count: {}):\n", self.points.len());
        for p in &self.points {
            out.push_str(&format!("  ({}, {}, {})\n", p.x, p.y, p.z));
        }
        out
    }

    /// Lists the triangles, one `[a, b, c]` per line.
    pub fn describe_triangles(&self) -> String {
        let mut out = format!("Triangles (count: {}):\n", self.triangles.len());
        for t in &self.triangles {
            out.push_str(&format!("  [{}, {}, {}]\n", t.a, t.b, t.c));
        }
        out
    }

    /// Lists the segments, one `(x, y, z) -> (x, y, z)` per line.
    pub fn describe_segments(&self) -> String {
        let mut out = format!("Segments (count: {}):\n", self.segments.len());
        for s in &self.segments {
            out.push_str(&format!(
                "  ({}, {}, {}) -> ({}, {}, {})\n",
                s.start.x, s.start.y, s.start.z, s.end.x, s.end.y, s.end.z
            ));
        }
        out
    }
}

impl FromStr for BspData {
    type Err = BspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, expected: &'static str) -> Result<T, BspError> {
        let token = self.inner.next().ok_or(BspError::UnexpectedEof { expected })?;
        token.parse().map_err(|_| BspError::InvalidInteger {
            token: token.to_owned(),
            expected,
        })
    }

    fn coordinate(&mut self, expected: &'static str) -> Result<i64, BspError> {
        let value: i64 = self.next(expected)?;
        if !(-MAX_COORDINATE..=MAX_COORDINATE).contains(&value) {
            return Err(BspError::CoordinateOutOfRange {
                value,
                limit: MAX_COORDINATE,
                expected,
            });
        }
        Ok(value)
    }

    fn point(&mut self, expected: &'static str) -> Result<Point3<i64>, BspError> {
        Ok(Point3::new(
            self.coordinate(expected)?,
            self.coordinate(expected)?,
            self.coordinate(expected)?,
        ))
    }
}

/// Builds one tree over all triangles and answers every segment.
///
/// Each inner list holds the ascending, duplicate-free 1-based ids of the
/// triangles the corresponding segment touches.
///
/// # Errors
/// Returns [`BspError::InvalidTriangleIndex`] if a triangle references a
/// missing point.
pub fn process_segments(data: &BspData) -> Result<Vec<Vec<usize>>, BspError> {
    let tree = data.build_tree()?;
    Ok(tree.process_segments(&data.segments))
}

/// Formats one result line: the hit count followed by the ids.
pub fn format_hits(hits: &[usize]) -> String {
    let mut line = hits.len().to_string();
    for id in hits {
        line.push(' ');
        line.push_str(&id.to_string());
    }
    line
}
