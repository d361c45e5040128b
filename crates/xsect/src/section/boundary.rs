//! Closed polygon boundaries and their area integrals.
//!
//! Purpose
//! - `Boundary`: an immutable, always-closed point sequence (first point
//!   repeated as last). Closing happens once at construction.
//! - Shoelace-style edge sums for area, centroid and second moments.
//!
//! Orientation
//! - CW and CCW traversals give the same area, centroid, `ix` and `iy`.
//!   The sign of the raw `ix` sum fixes the sign of `ixy` so the product of
//!   inertia stays consistent with the geometry.

use nalgebra::{matrix, Vector2};

use super::principal::MomentTensor;
use crate::error::{Result, SectionError};

/// Closed polygon outline in R².
///
/// Invariant: non-empty and `first == last`.
#[derive(Clone, Debug, PartialEq)]
pub struct Boundary {
    pts: Vec<Vector2<f64>>,
}

impl Boundary {
    /// Build a boundary, appending the first point if the input is open.
    pub fn new(points: Vec<Vector2<f64>>) -> Result<Self> {
        if points.is_empty() {
            return Err(SectionError::EmptyBoundary);
        }
        Ok(Self::closed(points))
    }

    pub fn from_xy(points: &[(f64, f64)]) -> Result<Self> {
        Self::new(points.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    /// Close a non-empty point list. Callers guarantee non-emptiness.
    pub(crate) fn closed(mut pts: Vec<Vector2<f64>>) -> Self {
        debug_assert!(!pts.is_empty(), "boundary needs at least one point");
        if let (Some(&first), Some(&last)) = (pts.first(), pts.last()) {
            if first != last {
                pts.push(first);
            }
        }
        Self { pts }
    }

    /// Points including the closing repeat.
    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.pts
    }

    /// Consecutive edges `(p_i, p_{i+1})`.
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        self.pts.windows(2).map(|w| (w[0], w[1]))
    }

    /// Number of vertices after collapsing consecutive duplicates.
    pub fn distinct_vertices(&self) -> usize {
        let mut v = self.pts.clone();
        v.dedup();
        v.len().saturating_sub(1).max(1)
    }

    /// Fewer than 3 distinct vertices or (numerically) zero area.
    pub fn is_degenerate(&self, area_eps: f64) -> bool {
        self.distinct_vertices() < 3 || !(area(self) > area_eps)
    }

    pub fn translated(&self, t: Vector2<f64>) -> Self {
        Self {
            pts: self.pts.iter().map(|p| p + t).collect(),
        }
    }

    /// Component-wise scale; `(-1, 1)` mirrors about the y-axis.
    pub fn scaled(&self, sx: f64, sy: f64) -> Self {
        Self {
            pts: self
                .pts
                .iter()
                .map(|p| Vector2::new(p.x * sx, p.y * sy))
                .collect(),
        }
    }

    /// Same outline traversed the other way.
    pub fn reversed(&self) -> Self {
        let mut pts = self.pts.clone();
        pts.reverse();
        Self { pts }
    }

    pub fn rotated(&self, angle: f64, origin: Vector2<f64>) -> Self {
        Self {
            pts: rotate2(&self.pts, angle, origin),
        }
    }
}

/// Append the first point if the sequence is open. Pure: returns a new list.
pub fn close_points(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut out = points.to_vec();
    if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
        if first != last {
            out.push(first);
        }
    }
    out
}

/// Rotate points counterclockwise by `angle` (radians) about `origin`.
pub fn rotate2(points: &[Vector2<f64>], angle: f64, origin: Vector2<f64>) -> Vec<Vector2<f64>> {
    let (s, c) = angle.sin_cos();
    let r = matrix![c, -s; s, c];
    points.iter().map(|p| r * (p - origin) + origin).collect()
}

/// Width and height of the bounding box.
pub fn dimensions(b: &Boundary) -> Vector2<f64> {
    let (mn, mx) = bounds(b.points().iter().copied());
    mx - mn
}

pub(crate) fn bounds(points: impl Iterator<Item = Vector2<f64>>) -> (Vector2<f64>, Vector2<f64>) {
    let inf = f64::INFINITY;
    points.fold(
        (Vector2::new(inf, inf), Vector2::new(-inf, -inf)),
        |(mn, mx), p| (mn.inf(&p), mx.sup(&p)),
    )
}

#[inline]
fn cross(p: Vector2<f64>, q: Vector2<f64>) -> f64 {
    p.x * q.y - q.x * p.y
}

/// Signed area: positive for counterclockwise traversal.
pub fn signed_area(b: &Boundary) -> f64 {
    0.5 * b.edges().map(|(p, q)| cross(p, q)).sum::<f64>()
}

/// Enclosed area (always ≥ 0).
pub fn area(b: &Boundary) -> f64 {
    signed_area(b).abs()
}

/// Area centroid.
///
/// The denominator is the signed sum (6× signed area), so the traversal
/// sign cancels. Zero area yields non-finite coordinates.
pub fn centroid(b: &Boundary) -> Vector2<f64> {
    let mut a = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (p, q) in b.edges() {
        let c = cross(p, q);
        a += c;
        cx += (p.x + q.x) * c;
        cy += (p.y + q.y) * c;
    }
    let a = 3.0 * a;
    Vector2::new(cx / a, cy / a)
}

/// Second moments about `origin` (default: the centroid).
///
/// `ix`/`iy` are returned as absolute values; `ixy` is negated when the raw
/// `ix` sum is negative (clockwise traversal).
pub fn inertias(b: &Boundary, origin: Option<Vector2<f64>>) -> MomentTensor {
    let o = origin.unwrap_or_else(|| centroid(b));
    let mut ix = 0.0;
    let mut iy = 0.0;
    let mut ixy = 0.0;
    for (p, q) in b.edges() {
        let (p, q) = (p - o, q - o);
        let c = cross(p, q);
        ix += c * (p.y * p.y + p.y * q.y + q.y * q.y);
        iy += c * (p.x * p.x + p.x * q.x + q.x * q.x);
        ixy += c * (p.x * q.y + 2.0 * p.x * p.y + 2.0 * q.x * q.y + q.x * p.y);
    }
    ix /= 12.0;
    iy /= 12.0;
    ixy /= 24.0;
    if ix < 0.0 {
        ixy = -ixy;
    }
    MomentTensor::new(ix.abs(), iy.abs(), ixy)
}
