//! Rolled-steel style profiles: angles, I-beams and T-beams.
//!
//! All outlines start at a bottom corner and are counterclockwise.

use crate::error::Result;
use crate::section::{section_summary, Boundary, SectionCfg, SectionSummary};
use nalgebra::Vector2;

fn outline(pts: &[(f64, f64)]) -> Boundary {
    Boundary::closed(pts.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
}

/// Angle with the heel at the origin.
///
/// `leg1` is vertical with thickness `t1`; `leg2` is horizontal with
/// thickness `t2` (defaults to `t1`).
pub fn angle_points(leg1: f64, leg2: f64, t1: f64, t2: Option<f64>) -> Boundary {
    let t2 = t2.unwrap_or(t1);
    outline(&[
        (0.0, 0.0),
        (leg2, 0.0),
        (leg2, t2),
        (t1, t2),
        (t1, leg1),
        (0.0, leg1),
        (0.0, 0.0),
    ])
}

pub fn angle_summary(
    leg1: f64,
    leg2: f64,
    t1: f64,
    t2: Option<f64>,
    cfg: &SectionCfg,
) -> Result<SectionSummary> {
    section_summary(&angle_points(leg1, leg2, t1, t2), cfg)
}

/// Doubly symmetric I-beam with the bottom-left corner at the origin.
pub fn i_beam_points(height: f64, width: f64, flange_thickness: f64, web_thickness: f64) -> Boundary {
    let x1 = 0.5 * (width - web_thickness);
    let x2 = x1 + web_thickness;
    let tf = flange_thickness;
    let y1 = height - tf;
    outline(&[
        (0.0, 0.0),
        (width, 0.0),
        (width, tf),
        (x2, tf),
        (x2, y1),
        (width, y1),
        (width, height),
        (0.0, height),
        (0.0, y1),
        (x1, y1),
        (x1, tf),
        (0.0, tf),
        (0.0, 0.0),
    ])
}

pub fn i_beam_summary(
    height: f64,
    width: f64,
    flange_thickness: f64,
    web_thickness: f64,
    cfg: &SectionCfg,
) -> Result<SectionSummary> {
    let b = i_beam_points(height, width, flange_thickness, web_thickness);
    section_summary(&b, cfg)
}

/// T-beam: web standing on the x-axis, flange on top.
pub fn t_beam_points(height: f64, width: f64, flange_thickness: f64, web_thickness: f64) -> Boundary {
    let x1 = 0.5 * (width - web_thickness);
    let x2 = x1 + web_thickness;
    let y1 = height - flange_thickness;
    outline(&[
        (x1, 0.0),
        (x2, 0.0),
        (x2, y1),
        (width, y1),
        (width, height),
        (0.0, height),
        (0.0, y1),
        (x1, y1),
        (x1, 0.0),
    ])
}

pub fn t_beam_summary(
    height: f64,
    width: f64,
    flange_thickness: f64,
    web_thickness: f64,
    cfg: &SectionCfg,
) -> Result<SectionSummary> {
    let b = t_beam_points(height, width, flange_thickness, web_thickness);
    section_summary(&b, cfg)
}
