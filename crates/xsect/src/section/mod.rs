//! Boundary-integral section properties.
//!
//! Purpose
//! - Area, centroid and second moments of closed polygon boundaries.
//! - Principal decomposition, radii of gyration, extreme fibers and elastic
//!   section moduli for single boundaries and composite (add/subtract) sets.
//! - The 16-field `SectionSummary` record.
//!
//! Data flow
//! - `Boundary` → `inertias` (`MomentTensor`) → principal/fiber derivations →
//!   `section_summary`. Composites fan out over boundaries about a shared
//!   origin and reduce by addition/subtraction before the same steps.
//!
//! Numerics
//! - Plain `f64`. Degenerate boundaries propagate NaN/Inf through the raw
//!   functions; the summary builders turn them into `SectionError`s.

mod boundary;
mod cfg;
mod fibers;
mod multi;
mod principal;
mod summary;

pub use boundary::{
    area, centroid, close_points, dimensions, inertias, rotate2, signed_area, Boundary,
};
pub use cfg::{FiberMode, SectionCfg, ANGLE_TOL};
pub use fibers::{
    elast_sect_mod, extreme_fibers, principal_elast_sect_mod, principal_elast_sect_mod_with,
    principal_extreme_fibers, principal_extreme_fibers_unrotated, principal_extreme_fibers_with,
};
pub use multi::{
    multi_area, multi_centroid, multi_dimensions, multi_elast_sect_mod, multi_extreme_fibers,
    multi_gyradii, multi_inertias, multi_principal_angles, multi_principal_elast_sect_mod,
    multi_principal_extreme_fibers, multi_principal_gyradii, multi_principal_inertias,
    CompositeSection,
};
pub use principal::{
    gyradii, principal_angles, principal_gyradii, principal_inertias, radii_of_gyration,
    MomentTensor,
};
pub use summary::{multi_section_summary, section_summary, SectionSummary};
