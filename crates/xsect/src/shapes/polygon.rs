//! Regular polygons (solid or hollow).

use std::f64::consts::PI;

use nalgebra::Vector2;

use super::round::linspace;
use crate::error::{Result, SectionError};
use crate::section::{section_summary, Boundary, SectionCfg, SectionSummary};

/// Boundary of a regular `n`-gon centered at the origin, first vertex on +y.
///
/// `inscribed`: vertices lie on `radius`; otherwise the edges are tangent
/// to it. A `thickness` adds an inner wall traversed in reverse.
pub fn polygon_points(
    n: usize,
    radius: f64,
    thickness: Option<f64>,
    inscribed: bool,
) -> Result<Boundary> {
    if n < 3 {
        return Err(SectionError::InvalidShape {
            message: format!("polygon needs at least 3 sides, got {n}"),
        });
    }
    let c = (PI / n as f64).cos();
    let ro = if inscribed { radius } else { radius / c };
    let dirs: Vec<Vector2<f64>> = linspace(0.5 * PI, 2.5 * PI, n + 1)
        .into_iter()
        .map(|a| Vector2::new(a.cos(), a.sin()))
        .collect();
    let mut pts: Vec<Vector2<f64>> = dirs.iter().map(|d| d * ro).collect();
    if let Some(t) = thickness {
        let ri = if inscribed {
            ro - t / c
        } else {
            (radius - t) / c
        };
        pts.extend(dirs.iter().rev().map(|d| d * ri));
    }
    Boundary::new(pts)
}

pub fn polygon_summary(
    n: usize,
    radius: f64,
    thickness: Option<f64>,
    inscribed: bool,
    cfg: &SectionCfg,
) -> Result<SectionSummary> {
    section_summary(&polygon_points(n, radius, thickness, inscribed)?, cfg)
}
