//! Rounds and pipes: closed forms plus a discretized boundary.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use crate::error::{Result, SectionError};
use crate::section::{section_summary, Boundary, SectionCfg, SectionSummary};

/// Upper bound on points per ring.
const MAX_ARC_SAMPLES: usize = 10_000_000;

/// Arc sampled by `round_points`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundArc {
    /// Start angle (radians).
    pub start: f64,
    /// Stop angle (radians).
    pub stop: f64,
    /// Arc length between samples; smaller is finer.
    pub step: f64,
}

impl Default for RoundArc {
    fn default() -> Self {
        Self {
            start: 0.0,
            stop: TAU,
            step: 0.01,
        }
    }
}

impl RoundArc {
    #[inline]
    pub fn is_full_ring(&self) -> bool {
        self.start == 0.0 && self.stop == TAU
    }

    /// Number of samples for the arc at radius `r`, at least 2.
    fn samples(&self, r: f64) -> Result<usize> {
        let n = (r * (self.stop - self.start) / self.step).abs().ceil();
        if !(n <= MAX_ARC_SAMPLES as f64) {
            return Err(SectionError::InvalidShape {
                message: format!("round: {n} samples exceeds {MAX_ARC_SAMPLES}"),
            });
        }
        Ok((n as usize).max(2))
    }

    /// Inclusive, evenly spaced angles covering the arc at radius `r`.
    fn angles(&self, r: f64, reverse: bool) -> Result<Vec<f64>> {
        let n = self.samples(r)?;
        let (a, b) = if reverse {
            (self.stop, self.start)
        } else {
            (self.start, self.stop)
        };
        Ok(linspace(a, b, n))
    }
}

/// `n` evenly spaced values from `a` to `b`, both inclusive.
pub(crate) fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    let d = (b - a) / (n - 1) as f64;
    (0..n)
        .map(|i| if i + 1 == n { b } else { a + i as f64 * d })
        .collect()
}

fn inner_radius(diameter: f64, thickness: Option<f64>) -> Option<f64> {
    thickness.map(|t| 0.5 * diameter - t)
}

pub fn round_area(diameter: f64, thickness: Option<f64>) -> f64 {
    let ro = 0.5 * diameter;
    match inner_radius(diameter, thickness) {
        None => PI * ro.powi(2),
        Some(ri) => PI * (ro.powi(2) - ri.powi(2)),
    }
}

/// Moment of inertia about any centroidal axis.
pub fn round_inertia(diameter: f64, thickness: Option<f64>) -> f64 {
    let ro = 0.5 * diameter;
    match inner_radius(diameter, thickness) {
        None => 0.25 * PI * ro.powi(4),
        Some(ri) => 0.25 * PI * (ro.powi(4) - ri.powi(4)),
    }
}

pub fn round_gyradius(diameter: f64, thickness: Option<f64>) -> f64 {
    (round_inertia(diameter, thickness) / round_area(diameter, thickness)).sqrt()
}

pub fn round_sect_mod(diameter: f64, thickness: Option<f64>) -> f64 {
    round_inertia(diameter, thickness) / (0.5 * diameter)
}

/// Boundary of a round (or pipe, outer ring then inner ring reversed),
/// centered at the origin.
pub fn round_points(diameter: f64, thickness: Option<f64>, arc: RoundArc) -> Result<Boundary> {
    if !(arc.step > 0.0) || !diameter.is_finite() {
        return Err(SectionError::InvalidShape {
            message: format!("round: diameter {diameter}, step {}", arc.step),
        });
    }
    let ro = 0.5 * diameter;
    let ring = |r: f64, reverse: bool| -> Result<Vec<Vector2<f64>>> {
        Ok(arc
            .angles(r, reverse)?
            .into_iter()
            .map(|a| Vector2::new(r * a.cos(), r * a.sin()))
            .collect())
    };
    let mut pts = ring(ro, false)?;
    if let Some(ri) = inner_radius(diameter, thickness) {
        pts.extend(ring(ri, true)?);
    }
    Boundary::new(pts)
}

/// Summary of a round or pipe.
///
/// A full ring uses the closed forms (exact); a partial arc falls back to
/// boundary integration of `round_points`.
pub fn round_summary(
    diameter: f64,
    thickness: Option<f64>,
    arc: RoundArc,
    cfg: &SectionCfg,
) -> Result<SectionSummary> {
    if !arc.is_full_ring() {
        return section_summary(&round_points(diameter, thickness, arc)?, cfg);
    }
    let a = round_area(diameter, thickness);
    if !(a > cfg.area_eps) {
        return Err(SectionError::DegenerateSection { area: a });
    }
    let i = round_inertia(diameter, thickness);
    let r = round_gyradius(diameter, thickness);
    let s = round_sect_mod(diameter, thickness);
    Ok(SectionSummary {
        area: a,
        x: 0.0,
        y: 0.0,
        width: diameter,
        height: diameter,
        inertia_x: i,
        inertia_y: i,
        inertia_j: 2.0 * i,
        inertia_xy: 0.0,
        inertia_z: i,
        gyradius_x: r,
        gyradius_y: r,
        gyradius_z: r,
        elast_sect_mod_x: s,
        elast_sect_mod_y: s,
        elast_sect_mod_z: s,
    })
}
