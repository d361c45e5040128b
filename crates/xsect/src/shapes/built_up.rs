//! Built-up sections assembled from angles: cruciforms and double angles.
//!
//! These return several boundaries and are summarized through the composite
//! aggregator.

use nalgebra::Vector2;

use super::profiles::angle_points;
use crate::error::Result;
use crate::section::{multi_section_summary, Boundary, SectionCfg, SectionSummary};

/// Four angles, heels offset by `separation / 2` from both axes, one per
/// quadrant.
pub fn cruciform_points(
    leg1: f64,
    leg2: f64,
    t1: f64,
    t2: Option<f64>,
    separation: f64,
) -> Vec<Boundary> {
    let h = 0.5 * separation;
    let a = angle_points(leg1, leg2, t1, t2).translated(Vector2::new(h, h));
    let (b, c, d) = (a.scaled(-1.0, 1.0), a.scaled(1.0, -1.0), a.scaled(-1.0, -1.0));
    vec![a, b, c, d]
}

pub fn cruciform_summary(
    leg1: f64,
    leg2: f64,
    t1: f64,
    t2: Option<f64>,
    separation: f64,
    cfg: &SectionCfg,
) -> Result<SectionSummary> {
    let add = cruciform_points(leg1, leg2, t1, t2, separation);
    multi_section_summary(&add, &[], cfg)
}

/// Two angles back to back across the y-axis, `separation` apart.
pub fn double_angle_points(
    leg1: f64,
    leg2: f64,
    t1: f64,
    t2: Option<f64>,
    separation: f64,
) -> Vec<Boundary> {
    let a = angle_points(leg1, leg2, t1, t2).translated(Vector2::new(0.5 * separation, 0.0));
    let b = a.scaled(-1.0, 1.0);
    vec![a, b]
}

pub fn double_angle_summary(
    leg1: f64,
    leg2: f64,
    t1: f64,
    t2: Option<f64>,
    separation: f64,
    cfg: &SectionCfg,
) -> Result<SectionSummary> {
    let add = double_angle_points(leg1, leg2, t1, t2, separation);
    multi_section_summary(&add, &[], cfg)
}
