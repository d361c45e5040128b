//! Composite sections: added and subtracted boundaries.
//!
//! Purpose
//! - Combine per-boundary integrals into one section. Every boundary's
//!   moments are taken about the same (composite) origin and then summed, so
//!   no parallel-axis transfer term is needed.
//!
//! Conventions
//! - `add` and `subtract` are always explicit slices; pass `&[]` for "no
//!   cut-outs".
//! - Extreme fibers only consider *added* boundaries: a cut-out cannot widen
//!   the outer envelope. Cut-outs are not checked to lie inside it.

use nalgebra::Vector2;

use super::boundary::{area, bounds, centroid, inertias, Boundary};
use super::fibers::flipped_extent;
use super::principal::{radii_of_gyration, MomentTensor};
use crate::error::{Result, SectionError};

/// Bounding-box width and height over all added boundaries.
pub fn multi_dimensions(add: &[Boundary]) -> Vector2<f64> {
    let (mn, mx) = bounds(add.iter().flat_map(|b| b.points().iter().copied()));
    mx - mn
}

/// Net area: Σ area(add) − Σ area(subtract).
pub fn multi_area(add: &[Boundary], subtract: &[Boundary]) -> f64 {
    total_area(add) - total_area(subtract)
}

fn total_area(bs: &[Boundary]) -> f64 {
    bs.iter().map(area).sum()
}

/// Σ area · centroid, skipping zero-area boundaries (their centroid is NaN
/// but their weight is zero).
fn first_moment(bs: &[Boundary]) -> Vector2<f64> {
    bs.iter()
        .map(|b| {
            let a = area(b);
            if a == 0.0 {
                Vector2::zeros()
            } else {
                centroid(b) * a
            }
        })
        .fold(Vector2::zeros(), |acc, m| acc + m)
}

/// Area-weighted centroid; subtracted boundaries carry negative weight.
pub fn multi_centroid(add: &[Boundary], subtract: &[Boundary]) -> Vector2<f64> {
    let m = first_moment(add) - first_moment(subtract);
    m / multi_area(add, subtract)
}

/// Moments about `origin` (default: the composite centroid).
pub fn multi_inertias(
    add: &[Boundary],
    subtract: &[Boundary],
    origin: Option<Vector2<f64>>,
) -> MomentTensor {
    let o = origin.unwrap_or_else(|| multi_centroid(add, subtract));
    let sum = |bs: &[Boundary]| -> MomentTensor { bs.iter().map(|b| inertias(b, Some(o))).sum() };
    sum(add) - sum(subtract)
}

pub fn multi_principal_inertias(add: &[Boundary], subtract: &[Boundary]) -> Vector2<f64> {
    multi_inertias(add, subtract, None).principal_inertias()
}

pub fn multi_principal_angles(add: &[Boundary], subtract: &[Boundary]) -> Vector2<f64> {
    multi_inertias(add, subtract, None).principal_angles()
}

pub fn multi_gyradii(add: &[Boundary], subtract: &[Boundary]) -> Vector2<f64> {
    let i = multi_inertias(add, subtract, None).axial();
    radii_of_gyration(i, multi_area(add, subtract))
}

pub fn multi_principal_gyradii(add: &[Boundary], subtract: &[Boundary]) -> Vector2<f64> {
    radii_of_gyration(
        multi_principal_inertias(add, subtract),
        multi_area(add, subtract),
    )
}

/// Extreme fibers `(c_y, c_x)` of the added points about the composite centroid.
pub fn multi_extreme_fibers(add: &[Boundary], subtract: &[Boundary]) -> Vector2<f64> {
    let c = multi_centroid(add, subtract);
    flipped_extent(add.iter().flat_map(|b| b.points()), c, None)
}

/// Extreme fibers in the composite principal frame.
pub fn multi_principal_extreme_fibers(add: &[Boundary], subtract: &[Boundary]) -> Vector2<f64> {
    let c = multi_centroid(add, subtract);
    let alpha = multi_inertias(add, subtract, Some(c)).principal_angles().x;
    flipped_extent(add.iter().flat_map(|b| b.points()), c, Some(alpha))
}

pub fn multi_elast_sect_mod(add: &[Boundary], subtract: &[Boundary]) -> Vector2<f64> {
    multi_inertias(add, subtract, None)
        .axial()
        .component_div(&multi_extreme_fibers(add, subtract))
}

pub fn multi_principal_elast_sect_mod(add: &[Boundary], subtract: &[Boundary]) -> Vector2<f64> {
    multi_principal_inertias(add, subtract)
        .component_div(&multi_principal_extreme_fibers(add, subtract))
}

/// Owned composite section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompositeSection {
    add: Vec<Boundary>,
    subtract: Vec<Boundary>,
}

impl CompositeSection {
    pub fn new(add: Vec<Boundary>, subtract: Vec<Boundary>) -> Self {
        Self { add, subtract }
    }

    /// Section without cut-outs.
    pub fn additive(add: Vec<Boundary>) -> Self {
        Self::new(add, Vec::new())
    }

    #[inline]
    pub fn add(&self) -> &[Boundary] {
        &self.add
    }

    #[inline]
    pub fn subtract(&self) -> &[Boundary] {
        &self.subtract
    }

    pub fn added_area(&self) -> f64 {
        total_area(&self.add)
    }

    pub fn subtracted_area(&self) -> f64 {
        total_area(&self.subtract)
    }

    pub fn area(&self) -> f64 {
        multi_area(&self.add, &self.subtract)
    }

    pub fn centroid(&self) -> Vector2<f64> {
        multi_centroid(&self.add, &self.subtract)
    }

    pub fn inertias(&self) -> MomentTensor {
        multi_inertias(&self.add, &self.subtract, None)
    }

    /// Strict check: at least one added boundary and positive net area.
    pub fn validate(&self) -> Result<()> {
        if self.add.is_empty() {
            return Err(SectionError::EmptyComposite);
        }
        let (added, subtracted) = (self.added_area(), self.subtracted_area());
        if !(added - subtracted > 0.0) {
            return Err(SectionError::NonPositiveNetArea { added, subtracted });
        }
        Ok(())
    }
}
