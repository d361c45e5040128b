//! Section summary record for single and composite sections.

use serde::{Deserialize, Serialize};

use super::boundary::{area, centroid, dimensions, inertias, Boundary};
use super::cfg::{FiberMode, SectionCfg};
use super::fibers::flipped_extent;
use super::multi::{multi_centroid, multi_dimensions, multi_inertias, CompositeSection};
use super::principal::{radii_of_gyration, MomentTensor};
use crate::error::{Result, SectionError};
use nalgebra::Vector2;

/// Canonical section properties. The `_z` fields refer to the weak principal axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub area: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub inertia_x: f64,
    pub inertia_y: f64,
    pub inertia_j: f64,
    pub inertia_xy: f64,
    pub inertia_z: f64,
    pub gyradius_x: f64,
    pub gyradius_y: f64,
    pub gyradius_z: f64,
    pub elast_sect_mod_x: f64,
    pub elast_sect_mod_y: f64,
    pub elast_sect_mod_z: f64,
}

impl SectionSummary {
    /// `(name, value)` pairs in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 16] {
        [
            ("area", self.area),
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
            ("inertia_x", self.inertia_x),
            ("inertia_y", self.inertia_y),
            ("inertia_j", self.inertia_j),
            ("inertia_xy", self.inertia_xy),
            ("inertia_z", self.inertia_z),
            ("gyradius_x", self.gyradius_x),
            ("gyradius_y", self.gyradius_y),
            ("gyradius_z", self.gyradius_z),
            ("elast_sect_mod_x", self.elast_sect_mod_x),
            ("elast_sect_mod_y", self.elast_sect_mod_y),
            ("elast_sect_mod_z", self.elast_sect_mod_z),
        ]
    }
}

/// Pieces shared by the single and composite assembly.
struct Parts {
    area: f64,
    c: Vector2<f64>,
    dims: Vector2<f64>,
    t: MomentTensor,
    fibers: Vector2<f64>,
    principal_fibers: Vector2<f64>,
}

fn assemble(p: Parts) -> SectionSummary {
    let pi = p.t.principal_inertias();
    let r = radii_of_gyration(p.t.axial(), p.area);
    let pr = radii_of_gyration(pi, p.area);
    let s = p.t.axial().component_div(&p.fibers);
    let ps = pi.component_div(&p.principal_fibers);
    SectionSummary {
        area: p.area,
        x: p.c.x,
        y: p.c.y,
        width: p.dims.x,
        height: p.dims.y,
        inertia_x: p.t.ix,
        inertia_y: p.t.iy,
        inertia_j: p.t.ij,
        inertia_xy: p.t.ixy,
        inertia_z: pi.min(),
        gyradius_x: r.x,
        gyradius_y: r.y,
        gyradius_z: pr.min(),
        elast_sect_mod_x: s.x,
        elast_sect_mod_y: s.y,
        elast_sect_mod_z: ps.min(),
    }
}

/// Summary for a single boundary.
///
/// Errors with `DegenerateSection` when the area is below `cfg.area_eps`.
pub fn section_summary(b: &Boundary, cfg: &SectionCfg) -> Result<SectionSummary> {
    let a = area(b);
    if !(a > cfg.area_eps) {
        return Err(SectionError::DegenerateSection { area: a });
    }
    let c = centroid(b);
    let t = inertias(b, Some(c));
    let fibers = flipped_extent(b.points(), c, None);
    let principal_fibers = match cfg.fiber_mode {
        FiberMode::Rotated => flipped_extent(b.points(), c, Some(t.principal_angles().x)),
        FiberMode::Unrotated => fibers,
    };
    Ok(assemble(Parts {
        area: a,
        c,
        dims: dimensions(b),
        t,
        fibers,
        principal_fibers,
    }))
}

/// Summary for a composite section.
///
/// Strict mode rejects a non-positive net area; otherwise a negative net
/// area is logged and propagated (gyradii become NaN).
///
/// `cfg.fiber_mode` selects the principal extreme fibers as for
/// `section_summary`, over the added points.
pub fn multi_section_summary(
    add: &[Boundary],
    subtract: &[Boundary],
    cfg: &SectionCfg,
) -> Result<SectionSummary> {
    if add.is_empty() {
        return Err(SectionError::EmptyComposite);
    }
    let added: f64 = add.iter().map(area).sum();
    let subtracted: f64 = subtract.iter().map(area).sum();
    let net = added - subtracted;
    if cfg.strict && !(net > 0.0) {
        return Err(SectionError::NonPositiveNetArea { added, subtracted });
    }
    if !(net.abs() > cfg.area_eps) {
        return Err(SectionError::DegenerateSection { area: net });
    }
    if net < 0.0 {
        tracing::warn!(added, subtracted, "composite section has negative net area");
    }
    let c = multi_centroid(add, subtract);
    let t = multi_inertias(add, subtract, Some(c));
    let pts = || add.iter().flat_map(|b| b.points());
    let fibers = flipped_extent(pts(), c, None);
    let principal_fibers = match cfg.fiber_mode {
        FiberMode::Rotated => flipped_extent(pts(), c, Some(t.principal_angles().x)),
        FiberMode::Unrotated => fibers,
    };
    Ok(assemble(Parts {
        area: net,
        c,
        dims: multi_dimensions(add),
        t,
        fibers,
        principal_fibers,
    }))
}

impl CompositeSection {
    pub fn summary(&self, cfg: &SectionCfg) -> Result<SectionSummary> {
        multi_section_summary(self.add(), self.subtract(), cfg)
    }
}
